// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for declaration validation warnings and errors.
//!
//! This module contains message types for logging events related to:
//! * Interface extension graph validation
//! * Cyclic extension detection
//! * Unresolved and duplicate interfaces
//! * Diagnostics reported by the validation pipeline

use crate::observability::messages::StructuredLog;
use crate::validation::{Diagnostic, Severity};
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Cyclic interface extension detected in a batch.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_logsmith::observability::messages::validation::CyclicExtensionDetected;
///
/// let cycle = vec!["a.A", "a.B", "a.A"];
/// let msg = CyclicExtensionDetected {
///     cycle: &cycle,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct CyclicExtensionDetected<'a> {
    pub cycle: &'a [&'a str],
}

impl Display for CyclicExtensionDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Cyclic interface extension detected: {}", self.cycle.join(" -> "))
    }
}

impl StructuredLog for CyclicExtensionDetected<'_> {
    fn log(&self) {
        tracing::error!(
            cycle = self.cycle.join(" -> "),
            cycle_length = self.cycle.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            cycle = self.cycle.join(" -> "),
            cycle_length = self.cycle.len(),
        )
    }
}

/// An interface extends an interface the batch does not declare.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_logsmith::observability::messages::validation::UnresolvedInterface;
///
/// let msg = UnresolvedInterface {
///     interface: "com.acme.TrainLogger",
///     missing_interface: "com.acme.Missing",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct UnresolvedInterface<'a> {
    pub interface: &'a str,
    pub missing_interface: &'a str,
}

impl Display for UnresolvedInterface<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Interface '{}' extends '{}' which is not declared",
            self.interface, self.missing_interface
        )
    }
}

impl StructuredLog for UnresolvedInterface<'_> {
    fn log(&self) {
        tracing::error!(
            interface = self.interface,
            missing_interface = self.missing_interface,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            interface = self.interface,
            missing_interface = self.missing_interface,
        )
    }
}

/// Two interfaces share a name.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct DuplicateInterface<'a> {
    pub interface: &'a str,
}

impl Display for DuplicateInterface<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Duplicate interface declaration: '{}'", self.interface)
    }
}

impl StructuredLog for DuplicateInterface<'_> {
    fn log(&self) {
        tracing::error!(interface = self.interface, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            interface = self.interface,
        )
    }
}

/// The declaration graph was rejected before resolution.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct DeclarationGraphRejected {
    pub error_count: usize,
}

impl Display for DeclarationGraphRejected {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Declaration graph rejected with {} error(s)",
            self.error_count
        )
    }
}

impl StructuredLog for DeclarationGraphRejected {
    fn log(&self) {
        tracing::error!(error_count = self.error_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            error_count = self.error_count,
        )
    }
}

/// A diagnostic produced by the validation pipeline.
///
/// # Log Level
/// `error!` for errors, `warn!` for warnings
pub struct DiagnosticReported<'a> {
    pub diagnostic: &'a Diagnostic,
}

impl Display for DiagnosticReported<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.diagnostic)
    }
}

impl StructuredLog for DiagnosticReported<'_> {
    fn log(&self) {
        let subject = self.diagnostic.subject.to_string();
        match self.diagnostic.severity {
            Severity::Error => tracing::error!(
                interface = self.diagnostic.subject.interface(),
                subject = subject.as_str(),
                "{}", self.diagnostic.text
            ),
            Severity::Warning => tracing::warn!(
                interface = self.diagnostic.subject.interface(),
                subject = subject.as_str(),
                "{}", self.diagnostic.text
            ),
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "diagnostic",
            span_name = name,
            interface = self.diagnostic.subject.interface(),
            severity = %self.diagnostic.severity,
        )
    }
}

/// A validator finished one pass.
///
/// # Log Level
/// `trace!` - Pipeline detail
pub struct ValidatorCompleted<'a> {
    pub validator: &'a str,
    pub diagnostic_count: usize,
}

impl Display for ValidatorCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Validator '{}' reported {} diagnostic(s)",
            self.validator, self.diagnostic_count
        )
    }
}

impl StructuredLog for ValidatorCompleted<'_> {
    fn log(&self) {
        tracing::trace!(
            validator = self.validator,
            diagnostic_count = self.diagnostic_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "validator",
            span_name = name,
            validator = self.validator,
        )
    }
}
