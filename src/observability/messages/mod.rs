// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable text and
//! [`StructuredLog`] to emit the event with structured fields at its
//! documented level.
//!
//! # Organization
//!
//! * `engine` - Session and batch runner lifecycle
//! * `resolver` - Message, id and construction resolution events
//! * `validation` - Declaration graph problems and reported diagnostics
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_logsmith::observability::messages::engine::BatchStarted;
//! use the_logsmith::observability::messages::StructuredLog;
//!
//! let msg = BatchStarted {
//!     interface_count: 3,
//!     max_concurrency: 4,
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod engine;
pub mod resolver;
pub mod validation;

/// A log event with structured fields.
pub trait StructuredLog: std::fmt::Display {
    /// Emit the event at its documented level.
    fn log(&self);

    /// Create a span carrying the same fields.
    fn span(&self, name: &str) -> Span;
}
