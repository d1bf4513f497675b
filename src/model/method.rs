// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::MESSAGE_METHOD_SUFFIX;
use crate::format::FormatKind;
use crate::model::{Parameter, ParameterRole, ReturnType, ThrowableType, Transform};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Numeric message id of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageId {
    /// Explicit `none`.
    Absent,
    /// No id declared. Renders like `none` but never stops id inheritance.
    Unspecified,
    /// Take the id of the nearest same-named method that declares one.
    Inherited,
    Explicit(u32),
}

impl MessageId {
    pub fn explicit(self) -> Option<u32> {
        match self {
            MessageId::Explicit(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageId::Absent => write!(f, "none"),
            MessageId::Unspecified => write!(f, "unspecified"),
            MessageId::Inherited => write!(f, "inherit"),
            MessageId::Explicit(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub text: String,
    pub format: FormatKind,
    pub id: MessageId,
    /// Copied from a same-name, same-arity sibling instead of declared.
    pub inherited: bool,
}

/// The parameter filling one format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatArgument<'a> {
    pub parameter: &'a Parameter,
    pub transform: Option<Transform>,
}

/// One method of a message interface, declared or inherited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageMethod {
    pub declaring_interface: String,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: ReturnType,
    pub thrown_types: Vec<ThrowableType>,
    /// Own annotation only; inherited messages are attached during resolution.
    pub message: Option<Message>,
    pub inherits_message: bool,
    pub log_level: Option<LogLevel>,
    pub is_overloaded: bool,
    pub translations: BTreeMap<String, String>,
    pub format_parameter_count: usize,
}

impl MessageMethod {
    pub fn is_logger_method(&self) -> bool {
        self.log_level.is_some()
    }

    pub fn parameters_with(&self, role: ParameterRole) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(move |p| role.matches(p.role))
    }

    pub fn format_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters_with(ParameterRole::Format)
    }

    /// Format arguments in argument order, `format_parameter_count` slots.
    ///
    /// Without positional parameters the format parameters fill the slots in
    /// declaration order. Once any parameter is positional only positions
    /// fill slots; the first parameter claiming a position keeps it and
    /// unclaimed slots stay `None`.
    pub fn format_arguments(&self) -> Vec<Option<FormatArgument<'_>>> {
        let mut slots: Vec<Option<FormatArgument<'_>>> = vec![None; self.format_parameter_count];
        if !self.format_parameters().any(Parameter::is_positional) {
            for (slot, parameter) in slots.iter_mut().zip(self.format_parameters()) {
                *slot = Some(FormatArgument {
                    parameter,
                    transform: None,
                });
            }
            return slots;
        }
        for parameter in self.format_parameters() {
            for (index, position) in parameter.positions.iter().enumerate() {
                let Some(slot) = position.checked_sub(1).and_then(|i| slots.get_mut(i)) else {
                    continue;
                };
                if slot.is_none() {
                    *slot = Some(FormatArgument {
                        parameter,
                        transform: parameter.transform_at(index),
                    });
                }
            }
        }
        slots
    }

    /// The first cause parameter. More than one is reported by validation.
    pub fn cause(&self) -> Option<&Parameter> {
        self.parameters_with(ParameterRole::Cause).next()
    }

    pub fn has_cause(&self) -> bool {
        self.cause().is_some()
    }

    /// `name(type, type)`, unique within a flattened interface.
    pub fn signature(&self) -> String {
        let types: Vec<String> = self.parameters.iter().map(Parameter::display_type).collect();
        format!("{}({})", self.name, types.join(", "))
    }

    /// Name of the generated accessor returning the raw message text.
    pub fn message_method_name(&self) -> String {
        if self.is_overloaded {
            format!("{}{}{}", self.name, self.format_parameter_count, MESSAGE_METHOD_SUFFIX)
        } else {
            format!("{}{}", self.name, MESSAGE_METHOD_SUFFIX)
        }
    }

    /// Key of the method in a translation table.
    pub fn translation_key(&self) -> String {
        if self.is_overloaded {
            format!("{}.{}", self.name, self.format_parameter_count)
        } else {
            self.name.clone()
        }
    }
}
