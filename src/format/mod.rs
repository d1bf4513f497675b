// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Format string parsing and validation.
//!
//! Two syntaxes are understood:
//!
//! * **printf**: `%[index$][flags][width][.precision][t|T]conversion`, following
//!   `java.util.Formatter`
//! * **MessageFormat**: `{index[,type[,style]]}` with single-quote escaping
//!
//! A third kind, `no_format`, treats the whole message as literal text.
//!
//! Parsing produces an ordered [`FormatSpec`] of literal runs and conversion
//! parts in source order. Validation then checks those parts against the
//! argument types of a method through the [`FormatValidator`] for the kind.
//!
//! # Example
//!
//! ```
//! use the_logsmith::format::{parse, validator_for, FormatKind};
//! use the_logsmith::model::TypeCatalog;
//!
//! let catalog = TypeCatalog::default();
//! let spec = parse("%2$d %1$s", FormatKind::Printf).unwrap();
//! let arguments = vec![
//!     catalog.argument_type("java.lang.String", false),
//!     catalog.argument_type("java.lang.Integer", false),
//! ];
//!
//! let result = validator_for(FormatKind::Printf).validate(&spec.parts, &arguments);
//! assert!(result.is_valid);
//! ```

mod message_format;
mod part;
mod printf;
mod validator;

pub use part::{
    ArgumentIndex, Conversion, ConversionCategory, ConversionSpec, Flag, FormatSpec,
    FormatSpecPart, MessageFormatType, PlaceholderSpec,
};
pub use validator::{
    validate_translation, validator_for, FormatValidator, MessageFormatValidator,
    NoFormatValidator, PrintfValidator, ValidationResult,
};

use crate::errors::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Syntax of a message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    #[default]
    Printf,
    MessageFormat,
    NoFormat,
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatKind::Printf => write!(f, "printf"),
            FormatKind::MessageFormat => write!(f, "message_format"),
            FormatKind::NoFormat => write!(f, "no_format"),
        }
    }
}

/// Tokenizes `format` according to `kind` in one forward scan.
pub fn parse(format: &str, kind: FormatKind) -> Result<FormatSpec, ParseError> {
    let parts = match kind {
        FormatKind::Printf => printf::parse(format)?,
        FormatKind::MessageFormat => message_format::parse(format)?,
        FormatKind::NoFormat if format.is_empty() => Vec::new(),
        FormatKind::NoFormat => vec![FormatSpecPart::Literal(format.to_string())],
    };
    Ok(FormatSpec { kind, parts })
}
