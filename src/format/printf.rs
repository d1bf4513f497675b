// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Scanner for `java.util.Formatter` style format strings.

use crate::errors::ParseError;
use crate::format::part::DATE_TIME_SUFFIXES;
use crate::format::{ArgumentIndex, Conversion, ConversionSpec, Flag, FormatSpecPart};

struct Scanner<'a> {
    source: &'a str,
    chars: Vec<(usize, char)>,
    cursor: usize,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Scanner {
            source,
            chars: source.char_indices().collect(),
            cursor: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.cursor).map(|(_, c)| *c)
    }

    fn bump(&mut self) -> Option<char> {
        let next = self.peek();
        if next.is_some() {
            self.cursor += 1;
        }
        next
    }

    /// Byte offset of the cursor.
    fn offset(&self) -> usize {
        self.chars
            .get(self.cursor)
            .map_or(self.source.len(), |(offset, _)| *offset)
    }

    fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.offset()]
    }

    fn digits(&mut self) -> Option<&'a str> {
        let start = self.offset();
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.cursor += 1;
        }
        let digits = self.slice_from(start);
        (!digits.is_empty()).then_some(digits)
    }
}

pub(crate) fn parse(format: &str) -> Result<Vec<FormatSpecPart>, ParseError> {
    let mut scanner = Scanner::new(format);
    let mut parts = Vec::new();
    let mut literal = String::new();

    while let Some(c) = scanner.bump() {
        if c != '%' {
            literal.push(c);
            continue;
        }

        let start = scanner.offset() - 1;
        match parse_specifier(&mut scanner, start)? {
            Some(spec) => {
                if !literal.is_empty() {
                    parts.push(FormatSpecPart::Literal(std::mem::take(&mut literal)));
                }
                parts.push(FormatSpecPart::Conversion(spec));
            }
            // Escaped percent stays in the literal run.
            None => literal.push_str(scanner.slice_from(start)),
        }
    }

    if !literal.is_empty() {
        parts.push(FormatSpecPart::Literal(literal));
    }
    Ok(parts)
}

/// Parses one specifier after its `%`. Returns `None` for a `%` conversion.
fn parse_specifier(scanner: &mut Scanner<'_>, start: usize) -> Result<Option<ConversionSpec>, ParseError> {
    let mut index = ArgumentIndex::Implicit;

    // Digits are an index only when followed by `$`; otherwise rewind and read them as flags/width.
    let mark = scanner.cursor;
    if let Some(digits) = scanner.digits() {
        if scanner.peek() == Some('$') {
            scanner.bump();
            let position = digits
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ParseError::InvalidIndex {
                    text: scanner.slice_from(start).to_string(),
                    position: start,
                })?;
            index = ArgumentIndex::Explicit(position);
        } else {
            scanner.cursor = mark;
        }
    }

    let mut flags = Vec::new();
    while let Some(flag) = scanner.peek().and_then(Flag::from_char) {
        let c = scanner.bump().unwrap_or_default();
        if flags.contains(&flag) {
            return Err(ParseError::DuplicateFlag {
                flag: c,
                text: scanner.slice_from(start).to_string(),
                position: start,
            });
        }
        if flag == Flag::Previous {
            index = ArgumentIndex::Previous;
        }
        flags.push(flag);
    }

    let width = match scanner.digits() {
        Some(digits) => Some(parse_number(digits, scanner, start)?),
        None => None,
    };

    let precision = if scanner.peek() == Some('.') {
        scanner.bump();
        match scanner.digits() {
            Some(digits) => Some(parse_number(digits, scanner, start)?),
            None => {
                return Err(ParseError::InvalidNumber {
                    text: scanner.slice_from(start).to_string(),
                    position: start,
                })
            }
        }
    } else {
        None
    };

    let conversion_char = scanner.bump().ok_or_else(|| ParseError::Unterminated {
        text: scanner.slice_from(start).to_string(),
        position: start,
    })?;

    if conversion_char == '%' {
        return Ok(None);
    }

    let (conversion, upper_case) =
        Conversion::from_char(conversion_char).ok_or_else(|| ParseError::UnknownConversion {
            conversion: conversion_char,
            text: scanner.slice_from(start).to_string(),
            position: start,
        })?;

    let date_time = if conversion == Conversion::DateTime {
        let suffix = scanner.bump().ok_or_else(|| ParseError::Unterminated {
            text: scanner.slice_from(start).to_string(),
            position: start,
        })?;
        if !DATE_TIME_SUFFIXES.contains(suffix) {
            return Err(ParseError::UnknownDateTimeConversion {
                conversion: suffix,
                text: scanner.slice_from(start).to_string(),
                position: start,
            });
        }
        Some(suffix)
    } else {
        None
    };

    Ok(Some(ConversionSpec {
        index,
        flags,
        width,
        precision,
        conversion,
        upper_case,
        date_time,
        position: start,
        text: scanner.slice_from(start).to_string(),
    }))
}

fn parse_number(digits: &str, scanner: &Scanner<'_>, start: usize) -> Result<usize, ParseError> {
    digits.parse::<usize>().map_err(|_| ParseError::InvalidNumber {
        text: scanner.slice_from(start).to_string(),
        position: start,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversions(format: &str) -> Vec<ConversionSpec> {
        parse(format)
            .expect("format should parse")
            .into_iter()
            .filter_map(|part| match part {
                FormatSpecPart::Conversion(spec) => Some(spec),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_literals_and_conversions_keep_source_order() {
        let parts = parse("Train %s left %d minutes late").unwrap();

        assert_eq!(parts.len(), 5);
        assert_eq!(parts[0], FormatSpecPart::Literal("Train ".into()));
        assert!(matches!(parts[1], FormatSpecPart::Conversion(ref c) if c.conversion == Conversion::String));
        assert_eq!(parts[2], FormatSpecPart::Literal(" left ".into()));
        assert!(matches!(parts[3], FormatSpecPart::Conversion(ref c) if c.conversion == Conversion::DecimalInteger));
        assert_eq!(parts[4], FormatSpecPart::Literal(" minutes late".into()));
    }

    #[test]
    fn test_escaped_percent_is_literal() {
        let parts = parse("100%% sure").unwrap();
        assert_eq!(parts, vec![FormatSpecPart::Literal("100%% sure".into())]);
    }

    #[test]
    fn test_full_specifier() {
        let specs = conversions("Padded id %1$-,08.3f");
        let spec = &specs[0];

        assert_eq!(spec.index, ArgumentIndex::Explicit(1));
        assert_eq!(spec.flags, vec![Flag::LeftJustify, Flag::Grouping, Flag::ZeroPad]);
        assert_eq!(spec.width, Some(8));
        assert_eq!(spec.precision, Some(3));
        assert_eq!(spec.conversion, Conversion::Decimal);
        assert_eq!(spec.position, 10);
        assert_eq!(spec.text, "%1$-,08.3f");
    }

    #[test]
    fn test_zero_flag_and_width() {
        let specs = conversions("Padded id %1$05d enabled");
        assert_eq!(specs[0].flags, vec![Flag::ZeroPad]);
        assert_eq!(specs[0].width, Some(5));
    }

    #[test]
    fn test_width_without_index() {
        let specs = conversions("[%10s]");
        assert_eq!(specs[0].index, ArgumentIndex::Implicit);
        assert_eq!(specs[0].width, Some(10));
    }

    #[test]
    fn test_date_time_with_previous_index() {
        let specs = conversions("Duke's Birthday: %1$tm %<te,%<tY");

        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0].date_time, Some('m'));
        assert_eq!(specs[1].index, ArgumentIndex::Previous);
        assert_eq!(specs[2].date_time, Some('Y'));
    }

    #[test]
    fn test_upper_case_variants() {
        let specs = conversions("Created a %s application from %S.");
        assert!(!specs[0].upper_case);
        assert!(specs[1].upper_case);
        assert_eq!(specs[1].conversion, Conversion::String);
    }

    #[test]
    fn test_unknown_conversion() {
        let error = parse("Invalid parameter %v").unwrap_err();
        assert!(matches!(error, ParseError::UnknownConversion { conversion: 'v', .. }));
        assert_eq!(error.position(), 18);
        assert_eq!(error.text(), "%v");
    }

    #[test]
    fn test_upper_case_only_where_allowed() {
        assert!(parse("%D").is_err());
        assert!(parse("%F").is_err());
        assert!(parse("%X").is_ok());
    }

    #[test]
    fn test_duplicate_flag() {
        let error = parse("%--5s").unwrap_err();
        assert!(matches!(error, ParseError::DuplicateFlag { flag: '-', .. }));
    }

    #[test]
    fn test_zero_index_is_rejected() {
        assert!(matches!(parse("%0$s").unwrap_err(), ParseError::InvalidIndex { .. }));
    }

    #[test]
    fn test_dangling_precision_and_trailing_percent() {
        assert!(matches!(parse("%.s").unwrap_err(), ParseError::InvalidNumber { .. }));
        assert!(matches!(parse("50%").unwrap_err(), ParseError::Unterminated { position: 2, .. }));
        assert!(matches!(parse("%t").unwrap_err(), ParseError::Unterminated { .. }));
    }

    #[test]
    fn test_unknown_date_time_suffix() {
        let error = parse("%tq").unwrap_err();
        assert!(matches!(error, ParseError::UnknownDateTimeConversion { conversion: 'q', .. }));
    }

    #[test]
    fn test_multibyte_positions_are_byte_offsets() {
        let specs = conversions("Zug ü %s");
        assert_eq!(specs[0].position, 7);
    }
}
