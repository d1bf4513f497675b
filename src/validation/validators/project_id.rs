// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::model::{MessageInterface, MessageMethod};
use crate::traits::{Validator, ValidatorScope};
use crate::validation::{Diagnostic, Subject, ValidationContext};
use std::collections::HashMap;

/// Explicit ids do not collide across interfaces sharing a project code.
///
/// Only declared methods count; collisions inside one interface are the
/// message id validator's concern.
pub struct ProjectIdValidator;

impl Validator for ProjectIdValidator {
    fn name(&self) -> &'static str {
        "project_id"
    }

    fn scope(&self) -> ValidatorScope {
        ValidatorScope::Batch
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut owners: HashMap<(&str, u32), (&MessageInterface, &MessageMethod)> = HashMap::new();

        for resolved in ctx.interfaces {
            let interface = &resolved.interface;
            if interface.project_code.is_empty() {
                continue;
            }
            for method in interface.declared_methods() {
                let Some(id) = method.message.as_ref().and_then(|m| m.id.explicit()) else {
                    continue;
                };
                let key = (interface.project_code.as_str(), id);
                match owners.get(&key) {
                    Some((owner, owner_method)) if owner.name != interface.name => {
                        diagnostics.push(Diagnostic::error(
                            Subject::of_method(interface, method),
                            format!(
                                "Message id {}{} is already used by {}#{}.",
                                interface.project_code,
                                id,
                                owner.name,
                                owner_method.signature()
                            ),
                        ));
                    }
                    Some(_) => {}
                    None => {
                        owners.insert(key, (interface, method));
                    }
                }
            }
        }
        diagnostics
    }
}
