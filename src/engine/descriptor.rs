// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ResolutionFailure;
use crate::model::{LogLevel, Message, Parameter, ReturnType};
use serde::Serialize;
use std::fmt;

/// How a throwable return value is constructed.
///
/// Listed in selection order; the resolver picks the first that applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum ConstructionStrategy {
    /// `new T(message, cause)`
    MessageAndCause,
    /// `new T(cause, message)`
    CauseAndMessage,
    /// `new T(message)`, then `initCause(cause)` when a cause exists
    Message { init_cause: bool },
    /// `new T(cause)`; the message is dropped
    CauseOnly,
    /// Custom ordered constructor call
    Custom { arguments: Vec<Parameter> },
    /// `new T(message, null)`
    MessageAndAbsentCause,
    /// `new T(null, message)`
    AbsentCauseAndMessage,
    /// `new T()`, then `initCause(cause)` when a cause exists; the message is dropped
    Default { init_cause: bool },
}

impl ConstructionStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            ConstructionStrategy::MessageAndCause => "message_and_cause",
            ConstructionStrategy::CauseAndMessage => "cause_and_message",
            ConstructionStrategy::Message { .. } => "message",
            ConstructionStrategy::CauseOnly => "cause_only",
            ConstructionStrategy::Custom { .. } => "custom",
            ConstructionStrategy::Default { .. } => "default",
            ConstructionStrategy::MessageAndAbsentCause => "message_and_absent_cause",
            ConstructionStrategy::AbsentCauseAndMessage => "absent_cause_and_message",
        }
    }

    /// Whether the formatted message reaches the constructed value.
    pub fn sets_message(&self) -> bool {
        match self {
            ConstructionStrategy::CauseOnly | ConstructionStrategy::Default { .. } => false,
            ConstructionStrategy::Custom { arguments } => arguments
                .iter()
                .any(|a| a.role == crate::model::ParameterRole::Message),
            _ => true,
        }
    }
}

impl fmt::Display for ConstructionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Everything a generator needs to implement one method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMethodDescriptor {
    pub interface: String,
    pub declaring_interface: String,
    pub name: String,
    pub signature: String,
    /// Effective message, own or inherited; `None` when none could be found.
    pub message: Option<Message>,
    pub parameters: Vec<Parameter>,
    pub format_parameter_count: usize,
    pub return_type: ReturnType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub construction: Option<ConstructionStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    pub is_overloaded: bool,
    pub message_method_name: String,
    pub translation_key: String,
    pub is_valid: bool,
}

/// A descriptor together with the reasons it is incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub descriptor: ResolvedMethodDescriptor,
    pub failures: Vec<ResolutionFailure>,
}
