// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::model::MessageMethod;
use crate::traits::Validator;
use crate::validation::{Diagnostic, Subject, ValidationContext};
use std::collections::HashMap;

/// At most one own message per (name, format parameter count) slot.
pub struct MessageAnnotationValidator;

impl Validator for MessageAnnotationValidator {
    fn name(&self) -> &'static str {
        "message_annotation"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for resolved in ctx.interfaces {
            let interface = &resolved.interface;
            let mut slots: HashMap<(&str, usize), &MessageMethod> = HashMap::new();
            for method in interface.methods.iter().filter(|m| m.message.is_some()) {
                let slot = (method.name.as_str(), method.format_parameter_count);
                match slots.get(&slot) {
                    Some(first) => diagnostics.push(Diagnostic::error(
                        Subject::of_method(interface, method),
                        format!(
                            "Only one message with the same format parameters is allowed; {} already declares one.",
                            first.signature()
                        ),
                    )),
                    None => {
                        slots.insert(slot, method);
                    }
                }
            }
        }
        diagnostics
    }
}
