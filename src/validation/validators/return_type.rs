// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::Validator;
use crate::validation::{Diagnostic, Subject, ValidationContext};

/// Log methods return nothing; every other method returns the message as a
/// String or wrapped in a throwable.
pub struct ReturnTypeValidator;

impl Validator for ReturnTypeValidator {
    fn name(&self) -> &'static str {
        "return_type"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for resolved in ctx.interfaces {
            let interface = &resolved.interface;
            for method in &interface.methods {
                if interface.is_logger() && method.is_logger_method() {
                    if !method.return_type.is_void() {
                        diagnostics.push(Diagnostic::error(
                            Subject::of_method(interface, method),
                            "Message logger methods can only have a void return type.",
                        ));
                    }
                } else if !method.return_type.is_message_value() {
                    diagnostics.push(Diagnostic::error(
                        Subject::of_method(interface, method),
                        format!(
                            "Message bundle method {} has an invalid return type of {}. Return types must be a String or a Throwable.",
                            method.name,
                            method.return_type.name()
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
    fn test_log_method_must_be_void() {
        let diagnostics = run(
            &ReturnTypeValidator,
            r#"
interfaces:
  - name: a.Logger
    kind: logger
    methods:
      - name: ok
        log_level: warn
        message: { value: "fine" }
      - name: returns
        log_level: warn
        return_type: java.lang.String
        message: { value: "not fine" }
"#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].subject.to_string(), "a.Logger#returns()");
        assert!(diagnostics[0].text.contains("void return type"));
    }

    #[test]
    fn test_bundle_methods_return_string_or_throwable() {
        let diagnostics = run(
            &ReturnTypeValidator,
            r#"
interfaces:
  - name: a.Messages
    kind: bundle
    methods:
      - name: text
        return_type: java.lang.String
        message: { value: "text" }
      - name: failure
        return_type: java.lang.IllegalStateException
        message: { value: "failure" }
      - name: nothing
        message: { value: "void" }
      - name: number
        return_type: java.lang.Integer
        message: { value: "number" }
"#,
        );
        let subjects: Vec<String> = diagnostics.iter().map(|d| d.subject.to_string()).collect();
        assert_eq!(subjects, vec!["a.Messages#nothing()", "a.Messages#number()"]);
        assert!(diagnostics[1].text.contains("java.lang.Integer"));
    }

    #[test]
    fn test_non_log_method_on_logger_follows_bundle_rules() {
        let diagnostics = run(
            &ReturnTypeValidator,
            r#"
interfaces:
  - name: a.Logger
    kind: logger
    methods:
      - name: describe
        return_type: java.lang.String
        message: { value: "description" }
      - name: silent
        message: { value: "silent" }
"#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].subject.to_string(), "a.Logger#silent()");
    }
}
