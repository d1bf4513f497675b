// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Scanner for `java.text.MessageFormat` patterns.

use crate::errors::ParseError;
use crate::format::{FormatSpecPart, MessageFormatType, PlaceholderSpec};

pub(crate) fn parse(format: &str) -> Result<Vec<FormatSpecPart>, ParseError> {
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut in_quote = false;
    let mut chars = format.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        match c {
            '\'' => {
                literal.push(c);
                if let Some((_, '\'')) = chars.peek() {
                    // `''` is a literal quote inside or outside a quoted run.
                    literal.push('\'');
                    chars.next();
                } else {
                    in_quote = !in_quote;
                }
            }
            '{' if !in_quote => {
                let mut depth = 1usize;
                let mut end = None;
                for (inner_offset, inner) in chars.by_ref() {
                    match inner {
                        '{' => depth += 1,
                        '}' => {
                            depth -= 1;
                            if depth == 0 {
                                end = Some(inner_offset);
                                break;
                            }
                        }
                        _ => {}
                    }
                }
                let end = end.ok_or_else(|| ParseError::UnmatchedBrace {
                    text: format[offset..].to_string(),
                    position: offset,
                })?;

                if !literal.is_empty() {
                    parts.push(FormatSpecPart::Literal(std::mem::take(&mut literal)));
                }
                parts.push(FormatSpecPart::Placeholder(parse_placeholder(
                    &format[offset..=end],
                    offset,
                )?));
            }
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        parts.push(FormatSpecPart::Literal(literal));
    }
    Ok(parts)
}

/// Parses `{index[,type[,style]]}`; `text` includes both braces.
fn parse_placeholder(text: &str, position: usize) -> Result<PlaceholderSpec, ParseError> {
    let body = &text[1..text.len() - 1];
    let mut segments = body.splitn(3, ',');

    let index_text = segments.next().unwrap_or_default().trim();
    let index = if index_text.is_empty() {
        0
    } else {
        index_text
            .parse::<usize>()
            .map_err(|_| ParseError::InvalidIndex {
                text: text.to_string(),
                position,
            })?
    };

    let format_type = match segments.next().map(str::trim) {
        Some(name) => Some(MessageFormatType::from_name(name).ok_or_else(|| {
            ParseError::UnknownFormatType {
                format_type: name.to_string(),
                text: text.to_string(),
                position,
            }
        })?),
        None => None,
    };

    let style = segments
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    Ok(PlaceholderSpec {
        index,
        format_type,
        style,
        position,
        text: text.to_string(),
    })
}
