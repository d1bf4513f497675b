// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for session and batch runner events.
//!
//! This module contains message types for logging events related to:
//! * Batch start and completion
//! * Per-interface processing
//! * Generation being blocked by errors

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Batch processing started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_logsmith::observability::messages::engine::BatchStarted;
///
/// let msg = BatchStarted {
///     interface_count: 5,
///     max_concurrency: 4,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct BatchStarted {
    pub interface_count: usize,
    pub max_concurrency: usize,
}

impl Display for BatchStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processing {} message interface(s), max_concurrency={}",
            self.interface_count, self.max_concurrency
        )
    }
}

impl StructuredLog for BatchStarted {
    fn log(&self) {
        tracing::info!(
            interface_count = self.interface_count,
            max_concurrency = self.max_concurrency,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "batch",
            span_name = name,
            interface_count = self.interface_count,
            max_concurrency = self.max_concurrency,
        )
    }
}

/// Batch processing completed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_logsmith::observability::messages::engine::BatchCompleted;
/// use std::time::Duration;
///
/// let msg = BatchCompleted {
///     interface_count: 5,
///     error_count: 1,
///     warning_count: 2,
///     duration: Duration::from_millis(12),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct BatchCompleted {
    pub interface_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub duration: std::time::Duration,
}

impl Display for BatchCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processed {} message interface(s) in {:?}: {} error(s), {} warning(s)",
            self.interface_count, self.duration, self.error_count, self.warning_count
        )
    }
}

impl StructuredLog for BatchCompleted {
    fn log(&self) {
        tracing::info!(
            interface_count = self.interface_count,
            error_count = self.error_count,
            warning_count = self.warning_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "batch_completed",
            span_name = name,
            interface_count = self.interface_count,
            error_count = self.error_count,
            warning_count = self.warning_count,
            duration = ?self.duration,
        )
    }
}

/// One interface was built, resolved and validated.
///
/// # Log Level
/// `debug!` - Per-interface detail
pub struct InterfaceProcessed<'a> {
    pub interface: &'a str,
    pub method_count: usize,
    pub diagnostic_count: usize,
}

impl Display for InterfaceProcessed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Interface '{}' processed: {} method(s), {} diagnostic(s)",
            self.interface, self.method_count, self.diagnostic_count
        )
    }
}

impl StructuredLog for InterfaceProcessed<'_> {
    fn log(&self) {
        tracing::debug!(
            interface = self.interface,
            method_count = self.method_count,
            diagnostic_count = self.diagnostic_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "interface",
            span_name = name,
            interface = self.interface,
            method_count = self.method_count,
        )
    }
}

/// Errors prevent generating an implementation for an interface.
///
/// # Log Level
/// `warn!` - Degraded output
///
/// # Example
/// ```
/// use the_logsmith::observability::messages::engine::GenerationBlocked;
///
/// let msg = GenerationBlocked {
///     interface: "com.acme.TrainLogger",
///     error_count: 2,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct GenerationBlocked<'a> {
    pub interface: &'a str,
    pub error_count: usize,
}

impl Display for GenerationBlocked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Generation blocked for '{}': {} error(s)",
            self.interface, self.error_count
        )
    }
}

impl StructuredLog for GenerationBlocked<'_> {
    fn log(&self) {
        tracing::warn!(
            interface = self.interface,
            error_count = self.error_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "generation_blocked",
            span_name = name,
            interface = self.interface,
            error_count = self.error_count,
        )
    }
}
