// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::resolver::select_strategy;
use crate::errors::ResolutionFailure;
use crate::model::ParameterRole;
use crate::traits::Validator;
use crate::validation::{Diagnostic, Subject, ValidationContext};

/// Throwable return values must be constructible, and should be able to
/// carry the formatted message.
pub struct ExceptionConstructorValidator;

pub const MESSAGE_IGNORED: &str =
    "The message cannot be set via the throwable constructor and will be ignored.";

impl Validator for ExceptionConstructorValidator {
    fn name(&self) -> &'static str {
        "exception_constructor"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for resolved in ctx.interfaces {
            let interface = &resolved.interface;
            for method in &interface.methods {
                let construction_parameters = method.parameters_with(ParameterRole::Construction).count();
                let subject = || Subject::of_method(interface, method);

                let throwable = match method.return_type.as_throwable() {
                    Some(throwable) => throwable,
                    None => {
                        if construction_parameters > 0 {
                            diagnostics.push(Diagnostic::error(
                                subject(),
                                format!(
                                    "Constructor parameters are only allowed on methods returning a Throwable; {} returns {}.",
                                    method.name,
                                    method.return_type.name()
                                ),
                            ));
                        }
                        continue;
                    }
                };

                if construction_parameters > 0 && !throwable.use_construction_parameters() {
                    diagnostics.push(Diagnostic::error(
                        subject(),
                        format!(
                            "Method {} declares constructor parameters but {} has no construction signature to pass them to.",
                            method.name, throwable.name
                        ),
                    ));
                    continue;
                }

                match select_strategy(method, throwable) {
                    Err(failure @ ResolutionFailure::UnconstructibleReturnType { .. }) => {
                        diagnostics.push(Diagnostic::error(subject(), failure.to_string()));
                    }
                    // Other failures are reported by the resolution validator.
                    Err(_) => {}
                    Ok(strategy) if !strategy.sets_message() => {
                        diagnostics.push(Diagnostic::warning(subject(), MESSAGE_IGNORED));
                    }
                    Ok(_) => {}
                }
            }
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::test_support::{errors, resolve_batch, run, warnings};

    fn bundle(constructors: &str, parameters: &str, signature: &str) -> String {
        format!(
            r#"
types:
  - name: a.Failure
    supertypes: [java.lang.RuntimeException]
    constructors: {}
interfaces:
  - name: a.Messages
    kind: bundle
    methods:
      - name: failure
        return_type: a.Failure
        message: {{ value: "Failed %s" }}
        signature: {}
        parameters: {}
"#,
            constructors, signature, parameters
        )
    }

    const CAUSE: &str = "[{ name: what, type: java.lang.String }, { name: e, type: java.lang.Throwable, cause: true }]";
    const PLAIN: &str = "[{ name: what, type: java.lang.String }]";

    #[test]
    fn test_default_constructor_with_cause_warns_once() {
        let diagnostics = run(&ExceptionConstructorValidator, &bundle("[default]", CAUSE, "null"));
        assert!(errors(&diagnostics).is_empty());
        let warnings = warnings(&diagnostics);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].text, MESSAGE_IGNORED);
    }

    #[test]
    fn test_absent_cause_constructor_keeps_the_message() {
        let batch = resolve_batch(&bundle("[default, string_throwable]", PLAIN, "null"));
        let diagnostics = ExceptionConstructorValidator.validate(&batch.context());
        assert!(diagnostics.is_empty());
        let construction = batch.interfaces[0].resolutions[0].descriptor.construction.as_ref();
        assert!(construction.is_some_and(|c| c.sets_message()));
    }

    #[test]
    fn test_cause_only_constructor_warns() {
        let diagnostics = run(&ExceptionConstructorValidator, &bundle("[throwable]", CAUSE, "null"));
        let warnings = warnings(&diagnostics);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].text, MESSAGE_IGNORED);
    }

    #[test]
    fn test_message_constructor_is_silent() {
        let diagnostics = run(&ExceptionConstructorValidator, &bundle("[string]", CAUSE, "null"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_no_applicable_constructor_is_an_error() {
        let diagnostics = run(&ExceptionConstructorValidator, &bundle("[throwable]", PLAIN, "null"));
        let errors = errors(&diagnostics);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].text.contains("usable constructor"));
    }

    #[test]
    fn test_constructor_parameters_need_a_signature() {
        let parameters = "[{ name: what, type: java.lang.String }, { name: code, type: int, param: true }]";
        let diagnostics = run(&ExceptionConstructorValidator, &bundle("[string]", parameters, "null"));
        let errors = errors(&diagnostics);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].text.contains("no construction signature"));
    }

    #[test]
    fn test_custom_signature_does_not_warn() {
        let parameters = "[{ name: what, type: java.lang.String }, { name: code, type: int, param: true }]";
        let diagnostics = run(
            &ExceptionConstructorValidator,
            &bundle("[]", parameters, "{ message_index: 1 }"),
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_constructor_parameters_on_string_method() {
        let diagnostics = run(
            &ExceptionConstructorValidator,
            r#"
interfaces:
  - name: a.Messages
    kind: bundle
    methods:
      - name: text
        return_type: java.lang.String
        message: { value: "text" }
        parameters: [{ name: code, type: int, param: true }]
"#,
        );
        assert_eq!(errors(&diagnostics).len(), 1);
    }
}
