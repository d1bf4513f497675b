// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::format::{parse, validator_for};
use crate::model::{ArgumentType, FormatArgument, MessageInterface, MessageMethod};
use std::collections::BTreeMap;
use crate::traits::Validator;
use crate::validation::{Diagnostic, Subject, ValidationContext};

/// The effective message of every method parses and fits its format
/// parameters.
///
/// In strict mode the number of referenced arguments must equal the number
/// of format parameters. Otherwise each unreferenced format parameter is a
/// warning. Positional parameters are checked for a complete, unambiguous
/// set of positions before their types are.
pub struct FormatStringValidator;

impl Validator for FormatStringValidator {
    fn name(&self) -> &'static str {
        "format"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for resolved in ctx.interfaces {
            let interface = &resolved.interface;
            for (method, resolution) in resolved.methods() {
                let Some(message) = resolution.descriptor.message.as_ref() else {
                    continue;
                };
                let subject = || Subject::of_method(interface, method);

                let spec = match parse(&message.text, message.format) {
                    Ok(spec) => spec,
                    Err(e) => {
                        diagnostics.push(Diagnostic::error(
                            subject(),
                            format!("Format '{}' appears to be invalid. Error: {}", message.text, e),
                        ));
                        continue;
                    }
                };

                let position_errors = position_diagnostics(interface, method);
                if !position_errors.is_empty() {
                    diagnostics.extend(position_errors);
                    continue;
                }

                let slots: Vec<FormatArgument<'_>> = method.format_arguments().into_iter().flatten().collect();
                let arguments: Vec<ArgumentType> = slots
                    .iter()
                    .map(|slot| match slot.transform {
                        Some(transform) => ctx.catalog.argument_type(transform.result_type(), false),
                        None => ctx
                            .catalog
                            .argument_type(&slot.parameter.type_name, slot.parameter.is_array_like()),
                    })
                    .collect();
                let validator = validator_for(message.format);

                let result = validator.validate(&spec.parts, &arguments);
                if !result.is_valid {
                    diagnostics.push(Diagnostic::error(subject(), result.detail));
                    continue;
                }

                if ctx.options.strict_argument_count {
                    let required = validator.argument_count(&spec.parts);
                    if required != arguments.len() {
                        diagnostics.push(Diagnostic::error(
                            subject(),
                            format!(
                                "Parameter count does not match for format '{}'. Required: {} Provided: {}",
                                message.text,
                                required,
                                arguments.len()
                            ),
                        ));
                    }
                } else {
                    let referenced = validator.referenced_arguments(&spec.parts);
                    for parameter in method.format_parameters() {
                        let used = slots
                            .iter()
                            .enumerate()
                            .any(|(i, slot)| slot.parameter.name == parameter.name && referenced.contains(&i));
                        if !used {
                            diagnostics.push(Diagnostic::warning(
                                Subject::of_parameter(interface, method, parameter),
                                format!("Parameter is not referenced by format '{}'.", message.text),
                            ));
                        }
                    }
                }
            }
        }
        diagnostics
    }
}

/// Positional parameters must claim each argument position exactly once.
fn position_diagnostics(interface: &MessageInterface, method: &MessageMethod) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    if !method.format_parameters().any(|p| p.is_positional() || !p.transforms.is_empty()) {
        return diagnostics;
    }

    let mut claimed: BTreeMap<usize, &str> = BTreeMap::new();
    let mut positional = false;
    for parameter in method.format_parameters() {
        let subject = || Subject::of_parameter(interface, method, parameter);
        if !parameter.is_positional() {
            if !parameter.transforms.is_empty() {
                diagnostics.push(Diagnostic::error(
                    subject(),
                    "Transforms can only be declared on positional parameters.",
                ));
            }
            continue;
        }
        positional = true;

        if !parameter.transforms.is_empty() && parameter.transforms.len() != parameter.positions.len() {
            diagnostics.push(Diagnostic::error(
                subject(),
                "Positional parameters with transforms must have an equal number of positions and transforms.",
            ));
        }

        let mut own: Vec<usize> = Vec::new();
        for &position in &parameter.positions {
            if own.contains(&position) {
                diagnostics.push(Diagnostic::error(
                    subject(),
                    format!("Position '{}' already used for this parameter.", position),
                ));
            } else {
                own.push(position);
            }
            if position == 0 || position > method.format_parameter_count {
                diagnostics.push(Diagnostic::error(
                    subject(),
                    format!(
                        "Position '{}' is outside the {} format argument(s).",
                        position, method.format_parameter_count
                    ),
                ));
                continue;
            }
            match claimed.get(&position) {
                Some(owner) if *owner != parameter.name.as_str() => {
                    diagnostics.push(Diagnostic::error(
                        subject(),
                        format!("Position '{}' already defined on parameter '{}'", position, owner),
                    ));
                }
                Some(_) => {}
                None => {
                    claimed.insert(position, &parameter.name);
                }
            }
        }
    }

    if positional {
        for position in 1..=method.format_parameter_count {
            if !claimed.contains_key(&position) {
                diagnostics.push(Diagnostic::error(
                    Subject::of_method(interface, method),
                    format!("Missing parameter with position '{}' defined.", position),
                ));
            }
        }
    }
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::test_support::{errors, run, warnings};

    fn logger(strict: bool, format: &str, value: &str, parameters: &str) -> String {
        format!(
            r#"
engine:
  strict_argument_count: {}
interfaces:
  - name: a.Logger
    kind: logger
    methods:
      - name: event
        log_level: info
        message: {{ value: "{}", format: {} }}
        parameters: {}
"#,
            strict, value, format, parameters
        )
    }

    const STRING_INT: &str = "[{ name: s, type: java.lang.String }, { name: n, type: int }]";

    #[test]
    fn test_valid_reordered_format() {
        let diagnostics = run(&FormatStringValidator, &logger(false, "printf", "%2$d %1$s", STRING_INT));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_type_mismatch_is_an_error() {
        let diagnostics = run(&FormatStringValidator, &logger(false, "printf", "%d %s", STRING_INT));
        assert_eq!(errors(&diagnostics).len(), 1);
    }

    #[test]
    fn test_parse_error_is_an_error() {
        let diagnostics = run(&FormatStringValidator, &logger(false, "printf", "50%", STRING_INT));
        let errors = errors(&diagnostics);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].text.contains("appears to be invalid"));
    }

    #[test]
    fn test_unreferenced_parameter_warns_when_lenient() {
        let diagnostics = run(&FormatStringValidator, &logger(false, "printf", "only %s", STRING_INT));
        assert!(errors(&diagnostics).is_empty());
        let warnings = warnings(&diagnostics);
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            &warnings[0].subject,
            Subject::Parameter { parameter, .. } if parameter == "n"
        ));
    }

    #[test]
    fn test_count_mismatch_is_an_error_when_strict() {
        let diagnostics = run(&FormatStringValidator, &logger(true, "printf", "only %s", STRING_INT));
        let errors = errors(&diagnostics);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].text.contains("Required: 1 Provided: 2"));
    }

    #[test]
    fn test_message_format_placeholders() {
        let diagnostics = run(
            &FormatStringValidator,
            &logger(true, "message_format", "{1} then {0}", STRING_INT),
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_positions_reorder_arguments() {
        let parameters = "[{ name: s, type: java.lang.String, positions: [2] }, { name: n, type: int, positions: [1] }]";
        let diagnostics = run(&FormatStringValidator, &logger(true, "printf", "%d %s", parameters));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_transforms_change_the_argument_type() {
        let parameters = "[{ name: s, type: java.lang.String, positions: [1, 2], transforms: [hash_code, get_class] }]";
        let diagnostics = run(&FormatStringValidator, &logger(true, "printf", "%d %s", parameters));
        assert!(diagnostics.is_empty());

        let untransformed = "[{ name: s, type: java.lang.String, positions: [1, 2] }]";
        let diagnostics = run(&FormatStringValidator, &logger(true, "printf", "%d %s", untransformed));
        assert_eq!(errors(&diagnostics).len(), 1);
    }

    #[test]
    fn test_position_reused_on_one_parameter() {
        let parameters = "[{ name: s, type: java.lang.String, positions: [1, 1] }]";
        let diagnostics = run(&FormatStringValidator, &logger(false, "printf", "%s %s", parameters));
        let texts: Vec<&str> = errors(&diagnostics).iter().map(|d| d.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Position '1' already used for this parameter.",
                "Missing parameter with position '2' defined.",
            ]
        );
    }

    #[test]
    fn test_position_claimed_by_another_parameter() {
        let parameters = "[{ name: a, type: java.lang.String, positions: [1] }, { name: b, type: java.lang.String, positions: [1] }]";
        let diagnostics = run(&FormatStringValidator, &logger(false, "printf", "%s %s", parameters));
        let errors = errors(&diagnostics);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].text, "Position '1' already defined on parameter 'a'");
        assert!(matches!(
            &errors[0].subject,
            Subject::Parameter { parameter, .. } if parameter == "b"
        ));
        assert_eq!(errors[1].text, "Missing parameter with position '2' defined.");
    }

    #[test]
    fn test_transform_count_must_match_positions() {
        let parameters = "[{ name: s, type: java.lang.String, positions: [1], transforms: [size, hash_code] }]";
        let diagnostics = run(&FormatStringValidator, &logger(false, "printf", "%d", parameters));
        let errors = errors(&diagnostics);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].text.contains("equal number of positions and transforms"));
    }

    #[test]
    fn test_transforms_need_positions() {
        let parameters = "[{ name: s, type: java.lang.String, transforms: [size] }]";
        let diagnostics = run(&FormatStringValidator, &logger(false, "printf", "%s", parameters));
        assert_eq!(errors(&diagnostics).len(), 1);
    }

    #[test]
    fn test_methods_without_message_are_skipped() {
        let diagnostics = run(
            &FormatStringValidator,
            r#"
interfaces:
  - name: a.Logger
    kind: logger
    methods:
      - name: event
        log_level: info
        parameters: [{ name: s, type: java.lang.String }]
"#,
        );
        assert!(diagnostics.is_empty());
    }
}
