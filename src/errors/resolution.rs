// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Reasons a method descriptor could not be fully resolved.
///
/// A failure never stops resolution: the descriptor is still produced in a
/// best-effort form and flagged invalid, and every failure becomes an ERROR
/// diagnostic on its method.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionFailure {
    /// No own message and no same-name, same-arity sibling carrying one
    #[error("All message bundles and message logger message methods must have or inherit a message. No message found for '{method}' with {format_parameter_count} format parameter(s).")]
    MissingMessage {
        method: String,
        format_parameter_count: usize,
    },

    /// The id is inherited but no same-named method in scope declares one
    #[error("Method '{method}' inherits its message id but no method named '{method}' in this interface or its ancestors declares one.")]
    MissingInheritableId { method: String },

    /// None of the construction strategies applies to the return type
    #[error("Method '{method}' does not have an usable constructor for the return type {return_type}.")]
    UnconstructibleReturnType { method: String, return_type: String },

    /// The custom constructor ordering cannot be built
    #[error("Invalid construction signature on method '{method}': {reason}")]
    InvalidConstructionSignature { method: String, reason: String },
}

impl ResolutionFailure {
    /// Name of the method the failure belongs to.
    pub fn method(&self) -> &str {
        match self {
            ResolutionFailure::MissingMessage { method, .. }
            | ResolutionFailure::MissingInheritableId { method }
            | ResolutionFailure::UnconstructibleReturnType { method, .. }
            | ResolutionFailure::InvalidConstructionSignature { method, .. } => method,
        }
    }
}
