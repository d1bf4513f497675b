// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::format::FormatKind;

/// Date/time suffixes accepted after `t` or `T`.
pub(crate) const DATE_TIME_SUFFIXES: &str = "HIklMSLNpzZsQBbhAaCYyjmdeRTrDFc";

/// How a printf conversion selects its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentIndex {
    /// Next argument of the running implicit index.
    Implicit,
    /// `n$`, 1-based.
    Explicit(usize),
    /// `<`, the argument of the previous conversion.
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    LeftJustify,
    Alternate,
    Sign,
    Space,
    ZeroPad,
    Grouping,
    Parentheses,
    Previous,
}

impl Flag {
    pub fn from_char(c: char) -> Option<Flag> {
        match c {
            '-' => Some(Flag::LeftJustify),
            '#' => Some(Flag::Alternate),
            '+' => Some(Flag::Sign),
            ' ' => Some(Flag::Space),
            '0' => Some(Flag::ZeroPad),
            ',' => Some(Flag::Grouping),
            '(' => Some(Flag::Parentheses),
            '<' => Some(Flag::Previous),
            _ => None,
        }
    }
}

/// What kind of argument a conversion consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionCategory {
    /// Any value.
    General,
    Character,
    Integral,
    FloatingPoint,
    DateTime,
    /// `%n` consumes nothing.
    NoArgument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Conversion {
    Boolean,
    HashCode,
    String,
    Character,
    DecimalInteger,
    OctalInteger,
    HexInteger,
    Scientific,
    Decimal,
    General,
    HexFloat,
    DateTime,
    LineSeparator,
}

impl Conversion {
    /// Conversion for a character, with whether it was the upper-case variant.
    pub fn from_char(c: char) -> Option<(Conversion, bool)> {
        let conversion = match c {
            'b' | 'B' => Conversion::Boolean,
            'h' | 'H' => Conversion::HashCode,
            's' | 'S' => Conversion::String,
            'c' | 'C' => Conversion::Character,
            'd' => Conversion::DecimalInteger,
            'o' => Conversion::OctalInteger,
            'x' | 'X' => Conversion::HexInteger,
            'e' | 'E' => Conversion::Scientific,
            'f' => Conversion::Decimal,
            'g' | 'G' => Conversion::General,
            'a' | 'A' => Conversion::HexFloat,
            't' | 'T' => Conversion::DateTime,
            'n' => Conversion::LineSeparator,
            _ => return None,
        };
        Some((conversion, c.is_ascii_uppercase()))
    }

    pub fn as_char(self) -> char {
        match self {
            Conversion::Boolean => 'b',
            Conversion::HashCode => 'h',
            Conversion::String => 's',
            Conversion::Character => 'c',
            Conversion::DecimalInteger => 'd',
            Conversion::OctalInteger => 'o',
            Conversion::HexInteger => 'x',
            Conversion::Scientific => 'e',
            Conversion::Decimal => 'f',
            Conversion::General => 'g',
            Conversion::HexFloat => 'a',
            Conversion::DateTime => 't',
            Conversion::LineSeparator => 'n',
        }
    }

    pub fn category(self) -> ConversionCategory {
        match self {
            Conversion::Boolean | Conversion::HashCode | Conversion::String => {
                ConversionCategory::General
            }
            Conversion::Character => ConversionCategory::Character,
            Conversion::DecimalInteger | Conversion::OctalInteger | Conversion::HexInteger => {
                ConversionCategory::Integral
            }
            Conversion::Scientific
            | Conversion::Decimal
            | Conversion::General
            | Conversion::HexFloat => ConversionCategory::FloatingPoint,
            Conversion::DateTime => ConversionCategory::DateTime,
            Conversion::LineSeparator => ConversionCategory::NoArgument,
        }
    }

    pub fn takes_argument(self) -> bool {
        self.category() != ConversionCategory::NoArgument
    }
}

/// One printf conversion as written in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSpec {
    pub index: ArgumentIndex,
    pub flags: Vec<Flag>,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub conversion: Conversion,
    pub upper_case: bool,
    /// Secondary character of a `t`/`T` conversion.
    pub date_time: Option<char>,
    /// Byte offset of the `%`.
    pub position: usize,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageFormatType {
    Number,
    Date,
    Time,
    Choice,
}

impl MessageFormatType {
    pub fn from_name(name: &str) -> Option<MessageFormatType> {
        match name.to_ascii_lowercase().as_str() {
            "number" => Some(MessageFormatType::Number),
            "date" => Some(MessageFormatType::Date),
            "time" => Some(MessageFormatType::Time),
            "choice" => Some(MessageFormatType::Choice),
            _ => None,
        }
    }
}

/// One MessageFormat placeholder as written in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSpec {
    /// 0-based; `{}` is index 0.
    pub index: usize,
    pub format_type: Option<MessageFormatType>,
    pub style: Option<String>,
    /// Byte offset of the `{`.
    pub position: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSpecPart {
    /// Raw source text between conversions, escapes included.
    Literal(String),
    Conversion(ConversionSpec),
    Placeholder(PlaceholderSpec),
}

impl FormatSpecPart {
    pub fn is_literal(&self) -> bool {
        matches!(self, FormatSpecPart::Literal(_))
    }

    pub fn as_conversion(&self) -> Option<&ConversionSpec> {
        match self {
            FormatSpecPart::Conversion(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_placeholder(&self) -> Option<&PlaceholderSpec> {
        match self {
            FormatSpecPart::Placeholder(spec) => Some(spec),
            _ => None,
        }
    }
}

/// A parsed format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    pub kind: FormatKind,
    pub parts: Vec<FormatSpecPart>,
}

impl FormatSpec {
    pub fn conversions(&self) -> impl Iterator<Item = &ConversionSpec> {
        self.parts.iter().filter_map(FormatSpecPart::as_conversion)
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &PlaceholderSpec> {
        self.parts.iter().filter_map(FormatSpecPart::as_placeholder)
    }
}
