// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

/// What a parameter is used for when the method is implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterRole {
    /// Query role only; matches every parameter.
    Any,
    Cause,
    Format,
    /// Passed to a custom throwable constructor.
    Construction,
    Field,
    Property,
    /// Logging class used to compute the caller.
    Fqcn,
    /// Synthetic message slot of a custom constructor argument list.
    Message,
}

impl ParameterRole {
    /// Whether a parameter with role `other` satisfies a query for `self`.
    pub fn matches(self, other: ParameterRole) -> bool {
        self == ParameterRole::Any || self == other
    }
}

/// Replaces a positional argument with a value derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    GetClass,
    HashCode,
    IdentityHashCode,
    Size,
}

impl Transform {
    /// Type of the value that reaches the format.
    pub fn result_type(self) -> &'static str {
        match self {
            Transform::GetClass => "java.lang.Class",
            Transform::HashCode | Transform::IdentityHashCode | Transform::Size => "int",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
    pub is_array: bool,
    pub is_primitive: bool,
    pub is_varargs: bool,
    pub role: ParameterRole,
    /// Member name for `Field`, setter name for `Property`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    /// Formatter class wrapping the value before formatting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter_class: Option<String>,
    /// 1-based format argument positions this parameter fills.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub positions: Vec<usize>,
    /// One transform per position, when given.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transforms: Vec<Transform>,
}

impl Parameter {
    /// The slot that receives the formatted message in a custom constructor call.
    pub fn message_slot(type_name: &str) -> Self {
        Parameter {
            name: "message".to_string(),
            type_name: type_name.to_string(),
            is_array: false,
            is_primitive: false,
            is_varargs: false,
            role: ParameterRole::Message,
            target_name: None,
            formatter_class: None,
            positions: Vec::new(),
            transforms: Vec::new(),
        }
    }

    pub fn is_format_parameter(&self) -> bool {
        self.role == ParameterRole::Format
    }

    pub fn is_positional(&self) -> bool {
        !self.positions.is_empty()
    }

    /// Format arguments this parameter supplies.
    pub fn format_slot_count(&self) -> usize {
        if !self.is_format_parameter() {
            0
        } else if self.is_positional() {
            self.positions.len()
        } else {
            1
        }
    }

    /// Transform applied at the `index`-th position. Transforms only apply
    /// when there is exactly one per position.
    pub fn transform_at(&self, index: usize) -> Option<Transform> {
        if self.transforms.len() == self.positions.len() {
            self.transforms.get(index).copied()
        } else {
            None
        }
    }

    /// Arrays and varargs are formatted as a whole value.
    pub fn is_array_like(&self) -> bool {
        self.is_array || self.is_varargs
    }

    /// Declared type as written, with `[]` for arrays and `...` for varargs.
    pub fn display_type(&self) -> String {
        if self.is_varargs {
            format!("{}...", self.type_name)
        } else if self.is_array {
            format!("{}[]", self.type_name)
        } else {
            self.type_name.clone()
        }
    }
}
