// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging throughout the logsmith. Message types follow a struct-based pattern
//! with `Display` trait implementation to:
//!
//! * Keep log text out of the engine and validator code
//! * Attach the same structured fields wherever an event is emitted
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::engine` - Session and batch runner lifecycle events
//! * `messages::resolver` - Message, id and construction strategy resolution
//! * `messages::validation` - Declaration graph problems and diagnostics
//!
//! # Usage
//!
//! ```rust
//! use the_logsmith::observability::messages::resolver::MessageInherited;
//!
//! let msg = MessageInherited {
//!     interface: "com.acme.TrainLogger",
//!     method: "delayed",
//!     source: "com.acme.CommonLogger",
//! };
//!
//! tracing::debug!("{}", msg);
//! ```

pub mod messages;
