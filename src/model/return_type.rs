// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Constructor shapes the engine knows how to call on a throwable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructorShape {
    Default,
    String,
    Throwable,
    StringThrowable,
    ThrowableString,
}

/// Positions of the message and cause inside a custom constructor call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionSignature {
    pub message_index: usize,
    #[serde(default)]
    pub cause_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThrowableType {
    pub name: String,
    pub constructors: BTreeSet<ConstructorShape>,
    /// Present when the method asks for a custom constructor ordering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub construction_signature: Option<ConstructionSignature>,
    pub is_checked: bool,
}

impl ThrowableType {
    pub fn has(&self, shape: ConstructorShape) -> bool {
        self.constructors.contains(&shape)
    }

    pub fn use_construction_parameters(&self) -> bool {
        self.construction_signature.is_some()
    }
}

/// Declared return type of a message method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReturnType {
    Void,
    String { name: String },
    Throwable(ThrowableType),
    Other { name: String },
}

impl ReturnType {
    pub fn name(&self) -> &str {
        match self {
            ReturnType::Void => "void",
            ReturnType::String { name } | ReturnType::Other { name } => name,
            ReturnType::Throwable(throwable) => &throwable.name,
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, ReturnType::Void)
    }

    pub fn as_throwable(&self) -> Option<&ThrowableType> {
        match self {
            ReturnType::Throwable(throwable) => Some(throwable),
            _ => None,
        }
    }

    /// String or throwable, the only values a bundle method may produce.
    pub fn is_message_value(&self) -> bool {
        matches!(self, ReturnType::String { .. } | ReturnType::Throwable(_))
    }
}
