// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::model::MessageMethod;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceKind {
    Logger,
    Bundle,
}

impl fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterfaceKind::Logger => write!(f, "logger"),
            InterfaceKind::Bundle => write!(f, "bundle"),
        }
    }
}

/// Inclusive range of message ids an interface may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRange {
    pub min: u32,
    pub max: u32,
}

impl IdRange {
    pub fn contains(&self, id: u32) -> bool {
        self.min <= id && id <= self.max
    }

    pub fn overlaps(&self, other: &IdRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageInterface {
    pub name: String,
    pub project_code: String,
    pub kind: InterfaceKind,
    pub extends: Vec<String>,
    /// Declared and inherited methods, pass-through logger bases excluded.
    pub methods: Vec<MessageMethod>,
    /// Signatures of methods delegated to a pass-through logger base.
    pub delegated: Vec<String>,
    pub valid_id_ranges: Vec<IdRange>,
    /// Zero means default padding.
    pub id_length: u8,
}

impl MessageInterface {
    pub fn is_logger(&self) -> bool {
        self.kind == InterfaceKind::Logger
    }

    /// Methods declared by this interface itself.
    pub fn declared_methods(&self) -> impl Iterator<Item = &MessageMethod> {
        self.methods
            .iter()
            .filter(move |m| m.declaring_interface == self.name)
    }

    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MessageMethod> {
        self.methods.iter().filter(move |m| m.name == name)
    }
}
