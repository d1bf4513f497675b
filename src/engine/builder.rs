// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Turns interface declarations into immutable `MessageInterface` models.

use crate::config::{Config, InterfaceDeclaration, InterfaceHierarchy, MethodDeclaration};
use crate::engine::classifier::{classify, format_parameter_count};
use crate::errors::EngineError;
use crate::model::{Message, MessageInterface, MessageMethod, TypeCatalog};

/// Builds the model of `name` with its flattened method list.
///
/// `is_overloaded` and `inherits_message` need every method of the closure,
/// so they are filled in after all methods are built.
pub fn build_interface(
    config: &Config,
    hierarchy: &InterfaceHierarchy,
    catalog: &TypeCatalog,
    name: &str,
) -> Result<MessageInterface, EngineError> {
    let declaration = config
        .interfaces
        .iter()
        .find(|i| i.name == name)
        .ok_or_else(|| EngineError::UnknownInterface {
            interface: name.to_string(),
        })?;

    let closure = hierarchy.closure(name)?;
    let flattened = hierarchy.flattened_methods(config, name)?;

    let mut methods = Vec::with_capacity(flattened.methods.len());
    for (declaring, method) in flattened.methods {
        if !closure.contains(&declaring.name.as_str()) {
            return Err(EngineError::IncompleteClosure {
                interface: name.to_string(),
                method: method.name.clone(),
                declaring: declaring.name.clone(),
            });
        }
        methods.push(build_method(declaring, method, catalog));
    }

    let flags: Vec<(bool, bool)> = methods
        .iter()
        .map(|method| {
            let siblings = methods.iter().filter(|other| other.name == method.name);
            let mut overloaded = false;
            let mut inherits = false;
            for other in siblings {
                if other.format_parameter_count != method.format_parameter_count {
                    overloaded = true;
                } else if method.message.is_none() && other.message.is_some() {
                    inherits = true;
                }
            }
            (overloaded, inherits)
        })
        .collect();
    for (method, (overloaded, inherits)) in methods.iter_mut().zip(flags) {
        method.is_overloaded = overloaded;
        method.inherits_message = inherits;
    }

    Ok(MessageInterface {
        name: declaration.name.clone(),
        project_code: declaration.project_code.clone(),
        kind: declaration.kind,
        extends: declaration.extends.clone(),
        methods,
        delegated: flattened.delegated,
        valid_id_ranges: declaration.valid_id_ranges.clone(),
        id_length: declaration.id_length,
    })
}

fn build_method(
    declaring: &InterfaceDeclaration,
    method: &MethodDeclaration,
    catalog: &TypeCatalog,
) -> MessageMethod {
    let parameters = classify(&method.parameters, catalog);
    let format_parameter_count = format_parameter_count(&parameters);

    MessageMethod {
        declaring_interface: declaring.name.clone(),
        name: method.name.clone(),
        parameters,
        return_type: catalog.return_type(&method.return_type, method.signature),
        thrown_types: method
            .throws
            .iter()
            .map(|thrown| catalog.throwable(thrown, None))
            .collect(),
        message: method.message.as_ref().map(|m| Message {
            text: m.value.clone(),
            format: m.format,
            id: m.message_id(),
            inherited: false,
        }),
        inherits_message: false,
        log_level: method.log_level,
        is_overloaded: false,
        translations: method.translations.clone(),
        format_parameter_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MessageId, ReturnType};

    fn build(yaml: &str, name: &str) -> MessageInterface {
        let config: Config = serde_yaml::from_str(yaml).expect("test batch should parse");
        let hierarchy = InterfaceHierarchy::build(&config);
        let catalog = TypeCatalog::build(&config.types, &config.engine.type_roots);
        build_interface(&config, &hierarchy, &catalog, name).expect("interface should build")
    }

    #[test]
    fn test_overloads_and_inheritance_flags() {
        let interface = build(
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
      - name: foo
        return_type: java.lang.String
        parameters: [{ name: c, type: java.lang.Object }]
"#,
            "a.Messages",
        );

        let flags: Vec<(bool, bool)> = interface
            .methods
            .iter()
            .map(|m| (m.is_overloaded, m.inherits_message))
            .collect();
        assert_eq!(flags, vec![(true, false), (true, false), (true, true)]);
        assert_eq!(interface.methods[1].message_method_name(), "foo2$str");
        assert_eq!(interface.methods[1].translation_key(), "foo.2");
    }

    #[test]
    fn test_single_method_is_not_overloaded() {
        let interface = build(
            r#"
interfaces:
  - name: a.Messages
    kind: bundle
    methods:
      - name: ready
        return_type: java.lang.String
        message: { value: "Ready", id: 3 }
"#,
            "a.Messages",
        );

        let method = &interface.methods[0];
        assert!(!method.is_overloaded);
        assert_eq!(method.message_method_name(), "ready$str");
        assert_eq!(method.translation_key(), "ready");
        assert_eq!(method.message.as_ref().unwrap().id, MessageId::Explicit(3));
        assert!(matches!(method.return_type, ReturnType::String { .. }));
    }

    #[test]
    fn test_inherited_methods_keep_their_declaring_interface() {
        let interface = build(
            r#"
interfaces:
  - name: a.Parent
    kind: logger
    extends: [org.jboss.logging.BasicLogger]
    methods:
      - { name: started, log_level: info, message: { value: "Started" } }
  - name: a.Child
    kind: logger
    extends: [a.Parent]
    methods:
      - { name: stopped, log_level: info, message: { value: "Stopped" } }
"#,
            "a.Child",
        );

        let declaring: Vec<&str> = interface
            .methods
            .iter()
            .map(|m| m.declaring_interface.as_str())
            .collect();
        assert_eq!(declaring, vec!["a.Child", "a.Parent"]);
        assert_eq!(interface.declared_methods().count(), 1);
    }
}
