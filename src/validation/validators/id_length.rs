// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{MAX_ID_LENGTH, MIN_ID_LENGTH};
use crate::model::MessageInterface;
use crate::traits::{Validator, ValidatorScope};
use crate::validation::{Diagnostic, Subject, ValidationContext};
use std::collections::HashMap;

/// Id padding is 0 or in range, and the same for every interface sharing a
/// project code.
pub struct IdLengthValidator;

impl Validator for IdLengthValidator {
    fn name(&self) -> &'static str {
        "id_length"
    }

    fn scope(&self) -> ValidatorScope {
        ValidatorScope::Batch
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut lengths: HashMap<&str, &MessageInterface> = HashMap::new();

        for resolved in ctx.interfaces {
            let interface = &resolved.interface;
            let length = interface.id_length;
            if length != 0 && !(MIN_ID_LENGTH..=MAX_ID_LENGTH).contains(&length) {
                diagnostics.push(Diagnostic::error(
                    Subject::of_interface(interface),
                    format!(
                        "The id length {} must be 0 or between {} and {}.",
                        length, MIN_ID_LENGTH, MAX_ID_LENGTH
                    ),
                ));
                continue;
            }
            if interface.project_code.is_empty() {
                continue;
            }
            match lengths.get(interface.project_code.as_str()) {
                Some(first) if first.id_length != length => diagnostics.push(Diagnostic::error(
                    Subject::of_interface(interface),
                    format!(
                        "The id length {} differs from the length {} used by {} for project code '{}'.",
                        length, first.id_length, first.name, interface.project_code
                    ),
                )),
                Some(_) => {}
                None => {
                    lengths.insert(&interface.project_code, interface);
                }
            }
        }
        diagnostics
    }
}
