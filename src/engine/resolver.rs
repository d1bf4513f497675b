// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Per-method descriptor resolution.
//!
//! # Message Inheritance
//!
//! Same-named methods only share a message when their format parameter
//! counts are equal. A method without its own message takes the message of
//! the first such sibling in closure order; the copy is flagged `inherited`.
//!
//! # Id Inheritance
//!
//! An `inherit` id is replaced by the id of the nearest same-named method
//! that declares one (a number or an explicit `none`). Methods whose message
//! leaves the id out are skipped. "Nearest" is measured
//! in extension edges from the method's declaring interface; only that
//! interface and its ancestors are searched, and ties go to the method found
//! first.
//!
//! # Construction Strategy
//!
//! For throwable return types the first applicable of:
//!
//! 1. `(String, Throwable)` with a cause
//! 2. `(Throwable, String)` with a cause
//! 3. `(String)`, plus `initCause` when a cause exists
//! 4. `(Throwable)` with a cause
//! 5. the custom signature, when one is declared
//! 6. `(String, Throwable)` passing no cause
//! 7. `(Throwable, String)` passing no cause
//! 8. `()`, plus `initCause` when a cause exists

use crate::config::InterfaceHierarchy;
use crate::engine::descriptor::{ConstructionStrategy, Resolution, ResolvedMethodDescriptor};
use crate::errors::ResolutionFailure;
use crate::model::{
    ConstructionSignature, ConstructorShape, Message, MessageId, MessageInterface, MessageMethod,
    Parameter, ParameterRole, ThrowableType,
};
use crate::observability::messages::resolver::{
    ConstructionStrategySelected, IdInherited, MessageInherited, ResolutionFailed,
};
use crate::observability::messages::StructuredLog;

pub struct MethodDescriptorResolver<'a> {
    hierarchy: &'a InterfaceHierarchy,
}

impl<'a> MethodDescriptorResolver<'a> {
    pub fn new(hierarchy: &'a InterfaceHierarchy) -> Self {
        Self { hierarchy }
    }

    /// One resolution per method of the flattened interface, in order.
    pub fn resolve(&self, interface: &MessageInterface) -> Vec<Resolution> {
        interface
            .methods
            .iter()
            .map(|method| self.resolve_method(interface, method))
            .collect()
    }

    fn resolve_method(&self, interface: &MessageInterface, method: &MessageMethod) -> Resolution {
        let mut failures = Vec::new();

        let mut message = effective_message(interface, method);
        match message.as_mut() {
            None => failures.push(ResolutionFailure::MissingMessage {
                method: method.name.clone(),
                format_parameter_count: method.format_parameter_count,
            }),
            Some(message) if message.id == MessageId::Inherited => {
                match self.inherited_id(interface, method) {
                    Some(id) => {
                        IdInherited {
                            interface: &interface.name,
                            method: &method.name,
                            id,
                        }
                        .log();
                        message.id = id;
                    }
                    None => failures.push(ResolutionFailure::MissingInheritableId {
                        method: method.name.clone(),
                    }),
                }
            }
            Some(_) => {}
        }

        let construction = match method.return_type.as_throwable() {
            Some(throwable) => match select_strategy(method, throwable) {
                Ok(strategy) => {
                    ConstructionStrategySelected {
                        method: &method.name,
                        return_type: &throwable.name,
                        strategy: strategy.name(),
                    }
                    .log();
                    Some(strategy)
                }
                Err(failure) => {
                    failures.push(failure);
                    None
                }
            },
            None => None,
        };

        for failure in &failures {
            ResolutionFailed {
                interface: &interface.name,
                failure,
            }
            .log();
        }

        let descriptor = ResolvedMethodDescriptor {
            interface: interface.name.clone(),
            declaring_interface: method.declaring_interface.clone(),
            name: method.name.clone(),
            signature: method.signature(),
            message,
            parameters: method.parameters.clone(),
            format_parameter_count: method.format_parameter_count,
            return_type: method.return_type.clone(),
            construction,
            log_level: method.log_level,
            is_overloaded: method.is_overloaded,
            message_method_name: method.message_method_name(),
            translation_key: method.translation_key(),
            is_valid: failures.is_empty(),
        };
        Resolution { descriptor, failures }
    }

    fn inherited_id(&self, interface: &MessageInterface, method: &MessageMethod) -> Option<MessageId> {
        let mut best: Option<(usize, MessageId)> = None;
        for candidate in interface.methods_named(&method.name) {
            let Some(message) = candidate.message.as_ref() else {
                continue;
            };
            if matches!(message.id, MessageId::Inherited | MessageId::Unspecified) {
                continue;
            }
            let Some(distance) = self
                .hierarchy
                .distance(&method.declaring_interface, &candidate.declaring_interface)
            else {
                continue;
            };
            if best.map_or(true, |(nearest, _)| distance < nearest) {
                best = Some((distance, message.id));
            }
        }
        best.map(|(_, id)| id)
    }
}

/// Own message, or a copy from the first same-name, same-arity sibling.
fn effective_message(interface: &MessageInterface, method: &MessageMethod) -> Option<Message> {
    if let Some(own) = &method.message {
        return Some(own.clone());
    }
    let source = interface.methods_named(&method.name).find(|other| {
        other.format_parameter_count == method.format_parameter_count && other.message.is_some()
    })?;
    MessageInherited {
        interface: &interface.name,
        method: &method.name,
        source: &source.declaring_interface,
    }
    .log();
    source.message.as_ref().map(|message| Message {
        inherited: true,
        ..message.clone()
    })
}

pub(crate) fn select_strategy(
    method: &MessageMethod,
    throwable: &ThrowableType,
) -> Result<ConstructionStrategy, ResolutionFailure> {
    let has_cause = method.has_cause();

    if has_cause && throwable.has(ConstructorShape::StringThrowable) {
        Ok(ConstructionStrategy::MessageAndCause)
    } else if has_cause && throwable.has(ConstructorShape::ThrowableString) {
        Ok(ConstructionStrategy::CauseAndMessage)
    } else if throwable.has(ConstructorShape::String) {
        Ok(ConstructionStrategy::Message {
            init_cause: has_cause,
        })
    } else if has_cause && throwable.has(ConstructorShape::Throwable) {
        Ok(ConstructionStrategy::CauseOnly)
    } else if let Some(signature) = throwable.construction_signature {
        Ok(ConstructionStrategy::Custom {
            arguments: custom_arguments(method, &throwable.name, signature)?,
        })
    } else if throwable.has(ConstructorShape::StringThrowable) {
        Ok(ConstructionStrategy::MessageAndAbsentCause)
    } else if throwable.has(ConstructorShape::ThrowableString) {
        Ok(ConstructionStrategy::AbsentCauseAndMessage)
    } else if throwable.has(ConstructorShape::Default) {
        Ok(ConstructionStrategy::Default {
            init_cause: has_cause,
        })
    } else {
        Err(ResolutionFailure::UnconstructibleReturnType {
            method: method.name.clone(),
            return_type: throwable.name.clone(),
        })
    }
}

/// Construction parameters in declaration order with the message and cause
/// slots inserted at their declared positions.
fn custom_arguments(
    method: &MessageMethod,
    return_type: &str,
    signature: ConstructionSignature,
) -> Result<Vec<Parameter>, ResolutionFailure> {
    let invalid = |reason: String| ResolutionFailure::InvalidConstructionSignature {
        method: method.name.clone(),
        reason,
    };

    let mut construction = method.parameters_with(ParameterRole::Construction);
    let construction_count = method.parameters_with(ParameterRole::Construction).count();
    let length = construction_count + 1 + usize::from(signature.cause_index.is_some());

    if signature.message_index >= length {
        return Err(invalid(format!(
            "message index {} is outside the {} constructor argument(s)",
            signature.message_index, length
        )));
    }
    let cause = match signature.cause_index {
        Some(index) if index >= length => {
            return Err(invalid(format!(
                "cause index {} is outside the {} constructor argument(s)",
                index, length
            )))
        }
        Some(index) if index == signature.message_index => {
            return Err(invalid(format!(
                "cause and message share constructor position {}",
                index
            )))
        }
        Some(_) => Some(method.cause().ok_or_else(|| {
            invalid("a cause position is declared but the method has no cause parameter".to_string())
        })?),
        None => None,
    };

    let mut arguments = Vec::with_capacity(length);
    for position in 0..length {
        if Some(position) == signature.cause_index {
            if let Some(cause) = cause {
                arguments.push(cause.clone());
            }
        } else if position == signature.message_index {
            arguments.push(Parameter::message_slot(return_type));
        } else if let Some(parameter) = construction.next() {
            arguments.push(parameter.clone());
        }
    }
    Ok(arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::engine::builder::build_interface;
    use crate::model::TypeCatalog;

    fn resolve(yaml: &str, name: &str) -> Vec<Resolution> {
        let config: Config = serde_yaml::from_str(yaml).expect("test batch should parse");
        let hierarchy = InterfaceHierarchy::build(&config);
        let catalog = TypeCatalog::build(&config.types, &config.engine.type_roots);
        let interface =
            build_interface(&config, &hierarchy, &catalog, name).expect("interface should build");
        MethodDescriptorResolver::new(&hierarchy).resolve(&interface)
    }

    fn exception_bundle(constructors: &str, parameters: &str) -> Vec<Resolution> {
        let yaml = format!(
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
        message: {{ value: "Failed" }}
        parameters: {}
"#,
            constructors, parameters
        );
        resolve(&yaml, "a.Messages")
    }

    const CAUSE: &str = "[{ name: e, type: java.lang.Throwable, cause: true }]";

    #[test]
    fn test_missing_message_for_other_arity() {
        let resolutions = resolve(
            r#"
interfaces:
  - name: a.Messages
    kind: bundle
    methods:
      - name: foo
        return_type: java.lang.String
        message: { value: "Foo %s" }
        parameters: [{ name: a, type: java.lang.String }]
      - name: foo
        return_type: java.lang.String
        parameters: [{ name: a, type: java.lang.String }, { name: b, type: java.lang.String }]
"#,
            "a.Messages",
        );

        assert!(resolutions[0].failures.is_empty());
        assert!(resolutions[0].descriptor.is_overloaded);
        assert!(resolutions[1].descriptor.is_overloaded);
        assert!(!resolutions[1].descriptor.is_valid);
        assert_eq!(
            resolutions[1].failures,
            vec![ResolutionFailure::MissingMessage {
                method: "foo".to_string(),
                format_parameter_count: 2,
            }]
        );
    }

    #[test]
    fn test_message_copied_from_same_arity_sibling() {
        let resolutions = resolve(
            r#"
interfaces:
  - name: a.Messages
    kind: bundle
    methods:
      - name: unknown
        return_type: java.lang.String
        message: { value: "Unknown %s", id: 7 }
        parameters: [{ name: a, type: java.lang.String }]
      - name: unknown
        return_type: java.lang.String
        parameters: [{ name: a, type: java.lang.Object }]
"#,
            "a.Messages",
        );

        let copied = resolutions[1].descriptor.message.as_ref().unwrap();
        assert!(resolutions[1].failures.is_empty());
        assert!(copied.inherited);
        assert_eq!(copied.text, "Unknown %s");
        assert_eq!(copied.id, MessageId::Explicit(7));
    }

    #[test]
    fn test_id_inherited_from_nearest_ancestor() {
        let resolutions = resolve(
            r#"
interfaces:
  - name: a.Root
    kind: bundle
    methods:
      - name: lost
        return_type: java.lang.String
        message: { value: "Lost at root", id: 1 }
  - name: a.Middle
    kind: bundle
    extends: [a.Root]
    methods:
      - name: lost
        return_type: java.lang.String
        message: { value: "Lost %s", id: 2 }
        parameters: [{ name: where, type: java.lang.String }]
  - name: a.Leaf
    kind: bundle
    extends: [a.Middle]
    methods:
      - name: lost
        return_type: java.lang.String
        message: { value: "Lost %s %s", id: inherit }
        parameters: [{ name: a, type: java.lang.String }, { name: b, type: java.lang.String }]
"#,
            "a.Leaf",
        );

        let leaf = &resolutions[0];
        assert!(leaf.failures.is_empty());
        assert_eq!(leaf.descriptor.message.as_ref().unwrap().id, MessageId::Explicit(2));
    }

    #[test]
    fn test_id_inheritance_skips_messages_without_an_id() {
        let resolutions = resolve(
            r#"
interfaces:
  - name: a.Root
    kind: bundle
    methods:
      - name: lost
        return_type: java.lang.String
        message: { value: "Lost at root", id: 1 }
  - name: a.Middle
    kind: bundle
    extends: [a.Root]
    methods:
      - name: lost
        return_type: java.lang.String
        message: { value: "Lost %s" }
        parameters: [{ name: where, type: java.lang.String }]
  - name: a.Leaf
    kind: bundle
    extends: [a.Middle]
    methods:
      - name: lost
        return_type: java.lang.String
        message: { value: "Lost %s %s", id: inherit }
        parameters: [{ name: a, type: java.lang.String }, { name: b, type: java.lang.String }]
"#,
            "a.Leaf",
        );

        let leaf = &resolutions[0];
        assert!(leaf.failures.is_empty());
        assert_eq!(leaf.descriptor.message.as_ref().unwrap().id, MessageId::Explicit(1));
        let middle = resolutions
            .iter()
            .find(|r| r.descriptor.declaring_interface == "a.Middle")
            .unwrap();
        assert_eq!(middle.descriptor.message.as_ref().unwrap().id, MessageId::Unspecified);
    }

    #[test]
    fn test_explicit_none_stops_id_inheritance() {
        let resolutions = resolve(
            r#"
interfaces:
  - name: a.Root
    kind: bundle
    methods:
      - name: lost
        return_type: java.lang.String
        message: { value: "Lost at root", id: 1 }
  - name: a.Leaf
    kind: bundle
    extends: [a.Root]
    methods:
      - name: lost
        return_type: java.lang.String
        message: { value: "Lost %s", id: none }
        parameters: [{ name: where, type: java.lang.String }]
      - name: lost
        return_type: java.lang.String
        message: { value: "Lost %s %s", id: inherit }
        parameters: [{ name: a, type: java.lang.String }, { name: b, type: java.lang.String }]
"#,
            "a.Leaf",
        );

        let inheriting = resolutions
            .iter()
            .find(|r| r.descriptor.format_parameter_count == 2)
            .unwrap();
        assert_eq!(inheriting.descriptor.message.as_ref().unwrap().id, MessageId::Absent);
    }

    #[test]
    fn test_id_not_inherited_from_descendant() {
        let resolutions = resolve(
            r#"
interfaces:
  - name: a.Parent
    kind: bundle
    methods:
      - name: lost
        return_type: java.lang.String
        message: { value: "Lost", id: inherit }
  - name: a.Child
    kind: bundle
    extends: [a.Parent]
    methods:
      - name: lost
        return_type: java.lang.String
        message: { value: "Lost %s", id: 9 }
        parameters: [{ name: where, type: java.lang.String }]
"#,
            "a.Child",
        );

        let parent_method = resolutions
            .iter()
            .find(|r| r.descriptor.declaring_interface == "a.Parent")
            .unwrap();
        assert_eq!(
            parent_method.failures,
            vec![ResolutionFailure::MissingInheritableId {
                method: "lost".to_string()
            }]
        );
    }

    #[test]
    fn test_strategy_message_and_cause() {
        let resolutions = exception_bundle("[default, string, string_throwable]", CAUSE);
        assert_eq!(
            resolutions[0].descriptor.construction,
            Some(ConstructionStrategy::MessageAndCause)
        );
    }

    #[test]
    fn test_strategy_string_with_init_cause() {
        let resolutions = exception_bundle("[default, string]", CAUSE);
        assert_eq!(
            resolutions[0].descriptor.construction,
            Some(ConstructionStrategy::Message { init_cause: true })
        );
    }

    #[test]
    fn test_strategy_cause_only() {
        let resolutions = exception_bundle("[throwable]", CAUSE);
        assert_eq!(
            resolutions[0].descriptor.construction,
            Some(ConstructionStrategy::CauseOnly)
        );
    }

    #[test]
    fn test_strategy_default_with_init_cause() {
        let resolutions = exception_bundle("[default]", CAUSE);
        assert_eq!(
            resolutions[0].descriptor.construction,
            Some(ConstructionStrategy::Default { init_cause: true })
        );
    }

    #[test]
    fn test_strategy_absent_cause_fallbacks() {
        let resolutions = exception_bundle("[string_throwable]", "[]");
        assert_eq!(
            resolutions[0].descriptor.construction,
            Some(ConstructionStrategy::MessageAndAbsentCause)
        );

        let resolutions = exception_bundle("[throwable_string]", "[]");
        assert_eq!(
            resolutions[0].descriptor.construction,
            Some(ConstructionStrategy::AbsentCauseAndMessage)
        );
    }

    #[test]
    fn test_absent_cause_constructor_preferred_over_default() {
        let resolutions = exception_bundle("[default, string_throwable]", "[]");
        let strategy = resolutions[0].descriptor.construction.as_ref().unwrap();
        assert_eq!(*strategy, ConstructionStrategy::MessageAndAbsentCause);
        assert!(strategy.sets_message());

        let resolutions = exception_bundle("[default, throwable_string]", "[]");
        assert_eq!(
            resolutions[0].descriptor.construction,
            Some(ConstructionStrategy::AbsentCauseAndMessage)
        );
    }

    #[test]
    fn test_unconstructible_return_type() {
        let resolutions = exception_bundle("[throwable]", "[]");
        assert!(!resolutions[0].descriptor.is_valid);
        assert!(matches!(
            resolutions[0].failures[0],
            ResolutionFailure::UnconstructibleReturnType { .. }
        ));
    }

    #[test]
    fn test_custom_signature_orders_arguments() {
        let resolutions = resolve(
            r#"
types:
  - name: a.CodedFailure
    supertypes: [java.lang.RuntimeException]
interfaces:
  - name: a.Messages
    kind: bundle
    methods:
      - name: coded
        return_type: a.CodedFailure
        message: { value: "Failed with %s" }
        signature: { message_index: 1, cause_index: 2 }
        parameters:
          - { name: code, type: int, param: true }
          - { name: e, type: java.lang.Throwable, cause: true }
          - { name: detail, type: java.lang.String }
"#,
            "a.Messages",
        );

        match &resolutions[0].descriptor.construction {
            Some(ConstructionStrategy::Custom { arguments }) => {
                let roles: Vec<ParameterRole> = arguments.iter().map(|a| a.role).collect();
                assert_eq!(
                    roles,
                    vec![ParameterRole::Construction, ParameterRole::Message, ParameterRole::Cause]
                );
            }
            other => panic!("expected a custom strategy, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_signature_without_cause_parameter() {
        let resolutions = resolve(
            r#"
types:
  - name: a.CodedFailure
    supertypes: [java.lang.RuntimeException]
interfaces:
  - name: a.Messages
    kind: bundle
    methods:
      - name: coded
        return_type: a.CodedFailure
        message: { value: "Failed" }
        signature: { message_index: 0, cause_index: 1 }
"#,
            "a.Messages",
        );

        assert!(matches!(
            resolutions[0].failures[0],
            ResolutionFailure::InvalidConstructionSignature { .. }
        ));
    }
}
