// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_CHARACTER_TYPES, DEFAULT_FLOATING_POINT_TYPES, DEFAULT_INTEGRAL_TYPES,
    DEFAULT_LOGGER_BASE, DEFAULT_MAX_CONCURRENCY, DEFAULT_PRIMITIVE_TYPES, DEFAULT_STRING_TYPE,
    DEFAULT_TEMPORAL_TYPES, DEFAULT_THROWABLE_TYPE, DEFAULT_UNCHECKED_TYPES, DEFAULT_VOID_TYPE,
};
use crate::config::{InterfaceDeclaration, TypeDeclaration};
use crate::errors::ConfigError;
use crate::observability::messages::validation::DeclarationGraphRejected;
use crate::observability::messages::StructuredLog;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A declaration batch: the engine options, the types the batch refers to
/// and the message interfaces to validate and resolve.
///
/// # Fields
/// * `engine` - Engine options (optional, every field defaulted)
/// * `types` - Declared types with supertypes and constructor shapes (optional)
/// * `interfaces` - Message interfaces in declaration order
///
/// # Example
/// ```yaml
/// engine:
///   strict_argument_count: true
///   max_concurrency: 4
/// types:
///   - name: com.acme.TrainException
///     supertypes: [java.lang.RuntimeException]
///     constructors: [default, string]
/// interfaces:
///   - name: com.acme.TrainLogger
///     kind: logger
///     project_code: TRN
///     extends: [org.jboss.logging.BasicLogger]
///     methods:
///       - name: departed
///         log_level: info
///         message: { value: "Train %s departed", id: 1 }
///         parameters: [{ name: train, type: java.lang.String }]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineOptions,
    #[serde(default)]
    pub types: Vec<TypeDeclaration>,
    #[serde(default)]
    pub interfaces: Vec<InterfaceDeclaration>,
}

/// Options that change how the engine validates a batch.
///
/// # Fields
/// * `logger_base_interfaces` - Pass-through bases whose methods are delegated
/// * `strict_argument_count` - Format argument counts must match exactly
/// * `max_concurrency` - Concurrent interface workers (optional)
/// * `type_roots` - Names of the types that anchor the built-in categories
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    pub logger_base_interfaces: Vec<String>,
    pub strict_argument_count: bool,
    pub max_concurrency: Option<usize>,
    pub type_roots: TypeRoots,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            logger_base_interfaces: vec![DEFAULT_LOGGER_BASE.to_string()],
            strict_argument_count: false,
            max_concurrency: None,
            type_roots: TypeRoots::default(),
        }
    }
}

impl EngineOptions {
    /// Get the worker count, using available parallelism if not configured.
    pub fn get_max_concurrency(&self) -> usize {
        self.max_concurrency.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(DEFAULT_MAX_CONCURRENCY)
        })
    }

    pub fn is_logger_base(&self, interface: &str) -> bool {
        self.logger_base_interfaces.iter().any(|base| base == interface)
    }
}

/// Type names that anchor the type catalog.
///
/// A type belongs to a category when it is one of the listed names or a
/// subtype of one.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TypeRoots {
    pub void_type: String,
    pub string_type: String,
    pub throwable_type: String,
    pub unchecked_types: Vec<String>,
    pub primitive_types: Vec<String>,
    pub integral_types: Vec<String>,
    pub floating_point_types: Vec<String>,
    pub character_types: Vec<String>,
    pub temporal_types: Vec<String>,
}

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for TypeRoots {
    fn default() -> Self {
        Self {
            void_type: DEFAULT_VOID_TYPE.to_string(),
            string_type: DEFAULT_STRING_TYPE.to_string(),
            throwable_type: DEFAULT_THROWABLE_TYPE.to_string(),
            unchecked_types: names(DEFAULT_UNCHECKED_TYPES),
            primitive_types: names(DEFAULT_PRIMITIVE_TYPES),
            integral_types: names(DEFAULT_INTEGRAL_TYPES),
            floating_point_types: names(DEFAULT_FLOATING_POINT_TYPES),
            character_types: names(DEFAULT_CHARACTER_TYPES),
            temporal_types: names(DEFAULT_TEMPORAL_TYPES),
        }
    }
}

/// Load a declaration batch from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a declaration batch from a YAML file
///
/// This function loads the batch and validates the interface extension graph
/// to ensure it's acyclic and all references are resolved.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;

    if let Err(validation_errors) = crate::config::validate_declaration_graph(&cfg) {
        DeclarationGraphRejected {
            error_count: validation_errors.len(),
        }
        .log();
        return Err(ConfigError::Invalid(validation_errors));
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConstructorShape, InterfaceKind, LogLevel, MessageId};
    use crate::config::MessageDeclaration;
    use crate::format::FormatKind;
    use std::io::Write;

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
interfaces:
  - name: com.acme.TrainLogger
    kind: logger
    project_code: TRN
    extends: [org.jboss.logging.BasicLogger]
    methods:
      - name: departed
        log_level: info
        message: { value: "Train %s departed", id: 1 }
        parameters: [{ name: train, type: java.lang.String }]
  - name: com.acme.TrainMessages
    kind: bundle
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.interfaces.len(), 2);

        let logger = &cfg.interfaces[0];
        assert_eq!(logger.kind, InterfaceKind::Logger);
        assert_eq!(logger.project_code, "TRN");

        let method = &logger.methods[0];
        assert_eq!(method.return_type, "void");
        assert_eq!(method.log_level, Some(LogLevel::Info));
        let message = method.message.as_ref().unwrap();
        assert_eq!(message.message_id(), MessageId::Explicit(1));
        assert_eq!(cfg.interfaces[1].kind, InterfaceKind::Bundle);
        assert!(cfg.interfaces[1].methods.is_empty());
    }

    #[test]
    fn test_engine_defaults() {
        let cfg: Config = serde_yaml::from_str("interfaces: []").unwrap();

        assert!(!cfg.engine.strict_argument_count);
        assert!(cfg.engine.is_logger_base("org.jboss.logging.BasicLogger"));
        assert!(cfg.engine.get_max_concurrency() >= 1);
        assert_eq!(cfg.engine.type_roots.string_type, "java.lang.String");
    }

    #[test]
    fn test_engine_partial_override() {
        let yaml = r#"
engine:
  strict_argument_count: true
  max_concurrency: 2
  type_roots:
    string_type: kotlin.String
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();

        assert!(cfg.engine.strict_argument_count);
        assert_eq!(cfg.engine.get_max_concurrency(), 2);
        assert_eq!(cfg.engine.type_roots.string_type, "kotlin.String");
        // Untouched roots keep their defaults
        assert_eq!(cfg.engine.type_roots.throwable_type, "java.lang.Throwable");
        assert_eq!(cfg.engine.logger_base_interfaces.len(), 1);
    }

    #[test]
    fn test_id_and_marker_forms() {
        let yaml = r#"
types:
  - name: com.acme.Failure
    supertypes: [java.lang.RuntimeException]
    constructors: [string_throwable]
interfaces:
  - name: com.acme.Messages
    kind: bundle
    methods:
      - name: inherited
        return_type: java.lang.String
        message: { value: "x", id: inherit }
      - name: none
        return_type: java.lang.String
        message: { value: "y", id: none, format: no_format }
      - name: failure
        return_type: com.acme.Failure
        signature: { message_index: 1 }
        parameters:
          - { name: code, type: int, param: true }
          - { name: target, type: java.lang.String, field: true }
          - { name: other, type: java.lang.String, property: renamed }
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        let methods = &cfg.interfaces[0].methods;

        assert_eq!(cfg.types[0].constructors, vec![ConstructorShape::StringThrowable]);
        assert_eq!(methods[0].message.as_ref().unwrap().message_id(), MessageId::Inherited);
        assert_eq!(methods[1].message.as_ref().unwrap().message_id(), MessageId::Absent);
        let failure_message = MessageDeclaration {
            value: "z".to_string(),
            format: FormatKind::default(),
            id: None,
        };
        assert_eq!(failure_message.message_id(), MessageId::Unspecified);
        assert_eq!(methods[2].signature.unwrap().message_index, 1);
        assert!(methods[2].parameters[0].param);
        assert_eq!(
            methods[2].parameters[1].field.as_ref().unwrap().resolve("target"),
            Some("target".to_string())
        );
        assert_eq!(
            methods[2].parameters[2].property.as_ref().unwrap().resolve("other"),
            Some("renamed".to_string())
        );
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let yaml = r#"
interfaces:
  - name: a.Base
    kind: logger
    extends: [org.jboss.logging.BasicLogger]
  - name: a.Child
    kind: logger
    extends: [a.Base]
"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let result = load_and_validate_config(file.path());
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_and_validate_cyclic_config() {
        let yaml = r#"
interfaces:
  - name: a.A
    kind: bundle
    extends: [a.B]
  - name: a.B
    kind: bundle
    extends: [a.A]
"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let result = load_and_validate_config(file.path());
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
        let error_msg = result.unwrap_err().to_string();
        assert!(error_msg.contains("Cyclic interface extension detected"));
    }

    #[test]
    fn test_load_and_validate_unresolved_interface() {
        let yaml = r#"
interfaces:
  - name: a.A
    kind: bundle
    extends: [a.Nowhere]
"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let error_msg = load_and_validate_config(file.path()).unwrap_err().to_string();
        assert!(error_msg.contains("extends 'a.Nowhere' which is not declared"));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config("/definitely/not/here.yaml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_malformed_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"interfaces: [{ name: a.A }]").unwrap();

        assert!(matches!(load_config(file.path()), Err(ConfigError::Yaml(_))));
    }
}
