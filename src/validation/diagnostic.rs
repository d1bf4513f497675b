// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::model::{MessageInterface, MessageMethod, Parameter};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocks generation for the interface.
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// What a diagnostic is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Subject {
    Interface {
        interface: String,
    },
    Method {
        interface: String,
        method: String,
    },
    Parameter {
        interface: String,
        method: String,
        parameter: String,
    },
}

impl Subject {
    pub fn interface(&self) -> &str {
        match self {
            Subject::Interface { interface }
            | Subject::Method { interface, .. }
            | Subject::Parameter { interface, .. } => interface,
        }
    }

    pub fn of_interface(interface: &MessageInterface) -> Self {
        Subject::Interface {
            interface: interface.name.clone(),
        }
    }

    pub fn of_method(interface: &MessageInterface, method: &MessageMethod) -> Self {
        Subject::Method {
            interface: interface.name.clone(),
            method: method.signature(),
        }
    }

    pub fn of_parameter(interface: &MessageInterface, method: &MessageMethod, parameter: &Parameter) -> Self {
        Subject::Parameter {
            interface: interface.name.clone(),
            method: method.signature(),
            parameter: parameter.name.clone(),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Interface { interface } => write!(f, "{}", interface),
            Subject::Method { interface, method } => write!(f, "{}#{}", interface, method),
            Subject::Parameter {
                interface,
                method,
                parameter,
            } => write!(f, "{}#{} parameter '{}'", interface, method, parameter),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub subject: Subject,
    pub text: String,
}

impl Diagnostic {
    pub fn error(subject: Subject, text: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            subject,
            text: text.into(),
        }
    }

    pub fn warning(subject: Subject, text: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            subject,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.severity, self.subject, self.text)
    }
}
