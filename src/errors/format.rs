// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors produced while tokenizing a format string.
///
/// Every variant carries the offending substring and its byte offset in the
/// source format so the detail can be shown next to the declaration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Conversion character outside the known set
    #[error("Unknown format conversion '{conversion}' in '{text}' at position {position}")]
    UnknownConversion {
        conversion: char,
        text: String,
        position: usize,
    },

    /// `t`/`T` followed by a character that is not a date/time suffix
    #[error("Unknown date/time conversion '{conversion}' in '{text}' at position {position}")]
    UnknownDateTimeConversion {
        conversion: char,
        text: String,
        position: usize,
    },

    /// The same flag appears twice in one specifier
    #[error("Duplicate flag '{flag}' in '{text}' at position {position}")]
    DuplicateFlag {
        flag: char,
        text: String,
        position: usize,
    },

    /// Zero or unparseable argument index
    #[error("Invalid argument index in '{text}' at position {position}")]
    InvalidIndex { text: String, position: usize },

    /// Width or precision that is missing digits or does not fit
    #[error("Invalid width or precision in '{text}' at position {position}")]
    InvalidNumber { text: String, position: usize },

    /// The format ends in the middle of a specifier
    #[error("Incomplete format specifier '{text}' at position {position}")]
    Unterminated { text: String, position: usize },

    /// A `{` without its closing `}`
    #[error("Unmatched brace in '{text}' at position {position}")]
    UnmatchedBrace { text: String, position: usize },

    /// A placeholder type other than number, date, time or choice
    #[error("Unknown format type '{format_type}' in '{text}' at position {position}")]
    UnknownFormatType {
        format_type: String,
        text: String,
        position: usize,
    },
}

impl ParseError {
    /// Byte offset of the offending specifier.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnknownConversion { position, .. }
            | ParseError::UnknownDateTimeConversion { position, .. }
            | ParseError::DuplicateFlag { position, .. }
            | ParseError::InvalidIndex { position, .. }
            | ParseError::InvalidNumber { position, .. }
            | ParseError::Unterminated { position, .. }
            | ParseError::UnmatchedBrace { position, .. }
            | ParseError::UnknownFormatType { position, .. } => *position,
        }
    }

    /// The offending substring.
    pub fn text(&self) -> &str {
        match self {
            ParseError::UnknownConversion { text, .. }
            | ParseError::UnknownDateTimeConversion { text, .. }
            | ParseError::DuplicateFlag { text, .. }
            | ParseError::InvalidIndex { text, .. }
            | ParseError::InvalidNumber { text, .. }
            | ParseError::Unterminated { text, .. }
            | ParseError::UnmatchedBrace { text, .. }
            | ParseError::UnknownFormatType { text, .. } => text,
        }
    }
}
