// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::model::MessageMethod;
use crate::traits::Validator;
use crate::validation::{Diagnostic, Subject, ValidationContext};
use std::collections::HashMap;

/// Explicit ids on own messages are unique within an interface.
///
/// Inherited ids and ids carried by inherited messages are copies and are
/// not counted.
pub struct MessageIdValidator;

impl Validator for MessageIdValidator {
    fn name(&self) -> &'static str {
        "message_id"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for resolved in ctx.interfaces {
            let interface = &resolved.interface;
            let mut seen: HashMap<u32, &MessageMethod> = HashMap::new();
            for method in &interface.methods {
                let Some(id) = method.message.as_ref().and_then(|m| m.id.explicit()) else {
                    continue;
                };
                match seen.get(&id) {
                    Some(first) => diagnostics.push(Diagnostic::error(
                        Subject::of_method(interface, method),
                        format!("Message id {} is not unique; it is already used by {}.", id, first.signature()),
                    )),
                    None => {
                        seen.insert(id, method);
                    }
                }
            }
        }
        diagnostics
    }
}
