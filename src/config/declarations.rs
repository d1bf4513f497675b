// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Raw declarations as they appear in a batch file.
//!
//! These mirror the annotations of the source interfaces one to one and carry
//! no derived information; the engine turns them into `model` values.

use crate::format::FormatKind;
use crate::model::{
    ConstructionSignature, ConstructorShape, IdRange, InterfaceKind, LogLevel, MessageId, Transform,
};
use serde::Deserialize;
use std::collections::BTreeMap;

/// A type the batch refers to, with its direct supertypes and constructors.
///
/// # Example
/// ```yaml
/// name: com.acme.TrainException
/// supertypes: [java.lang.RuntimeException]
/// constructors: [default, string, string_throwable]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TypeDeclaration {
    pub name: String,
    #[serde(default)]
    pub supertypes: Vec<String>,
    #[serde(default)]
    pub constructors: Vec<ConstructorShape>,
}

/// A message logger or message bundle interface.
///
/// # Fields
/// * `name` - Qualified interface name
/// * `kind` - `logger` or `bundle`
/// * `project_code` - Prefix of rendered message ids (optional)
/// * `extends` - Directly extended interfaces, including logger bases
/// * `id_length` - Zero-padding of rendered ids; 0 keeps the default
/// * `valid_id_ranges` - Ranges explicit ids must fall in (optional)
/// * `methods` - Declared methods in source order
#[derive(Debug, Clone, Deserialize)]
pub struct InterfaceDeclaration {
    pub name: String,
    pub kind: InterfaceKind,
    #[serde(default)]
    pub project_code: String,
    #[serde(default)]
    pub extends: Vec<String>,
    #[serde(default)]
    pub id_length: u8,
    #[serde(default)]
    pub valid_id_ranges: Vec<IdRange>,
    #[serde(default)]
    pub methods: Vec<MethodDeclaration>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MethodDeclaration {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDeclaration>,
    #[serde(default = "default_return_type")]
    pub return_type: String,
    #[serde(default)]
    pub throws: Vec<String>,
    #[serde(default)]
    pub message: Option<MessageDeclaration>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
    /// Custom constructor ordering for a throwable return type
    #[serde(default)]
    pub signature: Option<ConstructionSignature>,
    /// Inline translations keyed by locale
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
}

fn default_return_type() -> String {
    crate::config::consts::DEFAULT_VOID_TYPE.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageDeclaration {
    pub value: String,
    #[serde(default)]
    pub format: FormatKind,
    #[serde(default)]
    pub id: Option<IdDeclaration>,
}

/// `id: 12`, `id: inherit` or `id: none`.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum IdDeclaration {
    Number(u32),
    Keyword(IdKeyword),
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IdKeyword {
    Inherit,
    None,
}

impl MessageDeclaration {
    pub fn message_id(&self) -> MessageId {
        match self.id {
            Some(IdDeclaration::Number(id)) => MessageId::Explicit(id),
            Some(IdDeclaration::Keyword(IdKeyword::Inherit)) => MessageId::Inherited,
            Some(IdDeclaration::Keyword(IdKeyword::None)) => MessageId::Absent,
            None => MessageId::Unspecified,
        }
    }
}

/// `field: true` uses the parameter name, `field: someName` names the target.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum MemberTarget {
    Enabled(bool),
    Named(String),
}

impl MemberTarget {
    /// Target member name, or `None` when the marker is switched off.
    pub fn resolve(&self, parameter_name: &str) -> Option<String> {
        match self {
            MemberTarget::Enabled(false) => None,
            MemberTarget::Enabled(true) => Some(parameter_name.to_string()),
            MemberTarget::Named(name) if name.is_empty() => Some(parameter_name.to_string()),
            MemberTarget::Named(name) => Some(name.clone()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParameterDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub array: bool,
    #[serde(default)]
    pub varargs: bool,
    #[serde(default)]
    pub cause: bool,
    /// Passed to a custom throwable constructor
    #[serde(default)]
    pub param: bool,
    #[serde(default)]
    pub field: Option<MemberTarget>,
    #[serde(default)]
    pub property: Option<MemberTarget>,
    #[serde(default)]
    pub logging_class: bool,
    #[serde(default)]
    pub format_with: Option<String>,
    /// 1-based format argument positions, `positions: [2, 1]`
    #[serde(default)]
    pub positions: Vec<usize>,
    /// One transform per position
    #[serde(default)]
    pub transforms: Vec<Transform>,
}
