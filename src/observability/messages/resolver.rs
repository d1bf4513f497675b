// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for method descriptor resolution.

use crate::errors::ResolutionFailure;
use crate::model::MessageId;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A method took its message from a same-arity sibling.
///
/// # Log Level
/// `debug!` - Resolution detail
pub struct MessageInherited<'a> {
    pub interface: &'a str,
    pub method: &'a str,
    pub source: &'a str,
}

impl Display for MessageInherited<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Method '{}' of '{}' inherits its message from '{}'",
            self.method, self.interface, self.source
        )
    }
}

impl StructuredLog for MessageInherited<'_> {
    fn log(&self) {
        tracing::debug!(
            interface = self.interface,
            method = self.method,
            source = self.source,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "message_inherited",
            span_name = name,
            interface = self.interface,
            method = self.method,
        )
    }
}

/// An `inherit` id was replaced by an ancestor's id.
///
/// # Log Level
/// `debug!` - Resolution detail
pub struct IdInherited<'a> {
    pub interface: &'a str,
    pub method: &'a str,
    pub id: MessageId,
}

impl Display for IdInherited<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Method '{}' of '{}' inherits message id {}",
            self.method, self.interface, self.id
        )
    }
}

impl StructuredLog for IdInherited<'_> {
    fn log(&self) {
        tracing::debug!(
            interface = self.interface,
            method = self.method,
            id = %self.id,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "id_inherited",
            span_name = name,
            interface = self.interface,
            method = self.method,
            id = %self.id,
        )
    }
}

/// A construction strategy was chosen for a throwable return type.
///
/// # Log Level
/// `trace!` - Fine-grained resolution detail
pub struct ConstructionStrategySelected<'a> {
    pub method: &'a str,
    pub return_type: &'a str,
    pub strategy: &'a str,
}

impl Display for ConstructionStrategySelected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Method '{}' constructs {} using the {} strategy",
            self.method, self.return_type, self.strategy
        )
    }
}

impl StructuredLog for ConstructionStrategySelected<'_> {
    fn log(&self) {
        tracing::trace!(
            method = self.method,
            return_type = self.return_type,
            strategy = self.strategy,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "construction_strategy",
            span_name = name,
            method = self.method,
            strategy = self.strategy,
        )
    }
}

/// A descriptor could not be fully resolved.
///
/// # Log Level
/// `debug!` - The failure is reported again as an ERROR diagnostic
///
/// # Example
/// ```
/// use the_logsmith::errors::ResolutionFailure;
/// use the_logsmith::observability::messages::resolver::ResolutionFailed;
///
/// let failure = ResolutionFailure::MissingInheritableId {
///     method: "lost".to_string(),
/// };
/// let msg = ResolutionFailed {
///     interface: "com.acme.Messages",
///     failure: &failure,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ResolutionFailed<'a> {
    pub interface: &'a str,
    pub failure: &'a ResolutionFailure,
}

impl Display for ResolutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Resolution failed in '{}': {}", self.interface, self.failure)
    }
}

impl StructuredLog for ResolutionFailed<'_> {
    fn log(&self) {
        tracing::debug!(
            interface = self.interface,
            method = self.failure.method(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "resolution_failed",
            span_name = name,
            interface = self.interface,
            method = self.failure.method(),
        )
    }
}
