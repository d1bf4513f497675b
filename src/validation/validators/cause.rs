// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::model::ParameterRole;
use crate::traits::Validator;
use crate::validation::{Diagnostic, Subject, ValidationContext};

/// A method has at most one cause.
pub struct CauseValidator;

impl Validator for CauseValidator {
    fn name(&self) -> &'static str {
        "cause"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for resolved in ctx.interfaces {
            let interface = &resolved.interface;
            for method in &interface.methods {
                for extra in method.parameters_with(ParameterRole::Cause).skip(1) {
                    diagnostics.push(Diagnostic::error(
                        Subject::of_parameter(interface, method, extra),
                        "Only one cause parameter is allowed.",
                    ));
                }
            }
        }
        diagnostics
    }
}
