// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ResolutionFailure;
use crate::traits::Validator;
use crate::validation::{Diagnostic, Subject, ValidationContext};

/// Every resolution failure is an error on its method.
///
/// Unconstructible return types are left to the exception constructor
/// validator and missing messages to the parameter count validator, so each
/// is reported once.
pub struct ResolutionValidator;

impl Validator for ResolutionValidator {
    fn name(&self) -> &'static str {
        "resolution"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for resolved in ctx.interfaces {
            for (method, resolution) in resolved.methods() {
                for failure in &resolution.failures {
                    if matches!(
                        failure,
                        ResolutionFailure::UnconstructibleReturnType { .. }
                            | ResolutionFailure::MissingMessage { .. }
                    ) {
                        continue;
                    }
                    diagnostics.push(Diagnostic::error(
                        Subject::of_method(&resolved.interface, method),
                        failure.to_string(),
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
    fn test_missing_message_is_left_out() {
        let diagnostics = run(
            &ResolutionValidator,
            r#"
interfaces:
  - name: a.Messages
    kind: bundle
    methods:
      - name: foo
        return_type: java.lang.String
        message: { value: "foo %s" }
        parameters: [{ name: a, type: java.lang.String }]
      - name: foo
        return_type: java.lang.String
        parameters: [{ name: a, type: java.lang.String }, { name: b, type: java.lang.String }]
"#,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unconstructible_is_left_out() {
        let diagnostics = run(
            &ResolutionValidator,
            r#"
types:
  - name: a.Opaque
    supertypes: [java.lang.RuntimeException]
    constructors: []
interfaces:
  - name: a.Messages
    kind: bundle
    methods:
      - name: opaque
        return_type: a.Opaque
        message: { value: "opaque" }
"#,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_missing_inheritable_id() {
        let diagnostics = run(
            &ResolutionValidator,
            r#"
interfaces:
  - name: a.Logger
    kind: logger
    methods:
      - name: orphan
        log_level: info
        message: { value: "orphan", id: inherit }
"#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].text.contains("inherits its message id"));
    }
}
