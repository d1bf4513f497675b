// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use thiserror::Error;

/// Errors that can occur while validating the interface extension graph of a batch
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A circular extension chain was detected between interfaces
    CyclicExtension {
        /// The cycle path showing the circular extension
        cycle: Vec<String>,
    },
    /// An interface extends an interface that is neither declared nor a logger base
    UnresolvedInterface {
        /// The interface that has the unresolved reference
        interface: String,
        /// The extended interface that couldn't be resolved
        missing_interface: String,
    },
    /// Two interfaces share a qualified name
    DuplicateInterface {
        /// The duplicate interface name
        interface: String,
    },
    /// Two type declarations share a qualified name
    DuplicateType {
        /// The duplicate type name
        type_name: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::CyclicExtension { cycle } => {
                write!(f, "Cyclic interface extension detected: {}", cycle.join(" -> "))
            }
            ValidationError::UnresolvedInterface {
                interface,
                missing_interface,
            } => {
                write!(
                    f,
                    "Interface '{}' extends '{}' which is not declared",
                    interface, missing_interface
                )
            }
            ValidationError::DuplicateInterface { interface } => {
                write!(f, "Duplicate interface declaration: '{}'", interface)
            }
            ValidationError::DuplicateType { type_name } => {
                write!(f, "Duplicate type declaration: '{}'", type_name)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while loading a declaration batch.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The declaration file could not be read
    #[error("Failed to read declaration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The declaration file is not valid YAML for the expected shape
    #[error("Failed to parse declarations: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The extension graph of the batch is inconsistent
    #[error("Configuration validation failed:\n{}", render_all(.0))]
    Invalid(Vec<ValidationError>),
}

fn render_all(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}
