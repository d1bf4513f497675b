// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::Validator;
use crate::validation::{Diagnostic, Subject, ValidationContext};

/// Message methods may only declare unchecked throwables.
pub struct ThrownTypesValidator;

impl Validator for ThrownTypesValidator {
    fn name(&self) -> &'static str {
        "thrown_types"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for resolved in ctx.interfaces {
            let interface = &resolved.interface;
            for method in &interface.methods {
                for thrown in method.thrown_types.iter().filter(|t| t.is_checked) {
                    diagnostics.push(Diagnostic::error(
                        Subject::of_method(interface, method),
                        format!(
                            "Interface message methods cannot throw checked exceptions; {} declares {}.",
                            method.name, thrown.name
                        ),
                    ));
                }
            }
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::test_support::run;

    #[test]
    fn test_checked_throwable_is_rejected() {
        let diagnostics = run(
            &ThrownTypesValidator,
            r#"
interfaces:
  - name: a.Messages
    kind: bundle
    methods:
      - name: text
        return_type: java.lang.String
        message: { value: "text" }
        throws: [java.lang.IllegalStateException, java.io.IOException]
"#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].text.contains("java.io.IOException"));
    }
}
