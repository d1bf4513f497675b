// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::format::validate_translation;
use crate::traits::Validator;
use crate::validation::{Diagnostic, Subject, ValidationContext};

/// Inline translations use the same conversions as the message they translate.
pub struct TranslationValidator;

impl Validator for TranslationValidator {
    fn name(&self) -> &'static str {
        "translation"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for resolved in ctx.interfaces {
            for (method, resolution) in resolved.methods() {
                let Some(message) = resolution.descriptor.message.as_ref() else {
                    continue;
                };
                for (locale, text) in &method.translations {
                    let result = validate_translation(message.format, &message.text, text);
                    if !result.is_valid {
                        diagnostics.push(Diagnostic::error(
                            Subject::of_method(&resolved.interface, method),
                            format!("Translation for locale '{}' is invalid: {}", locale, result.detail),
                        ));
                    }
                }
            }
        }
        diagnostics
    }
}
