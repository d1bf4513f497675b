// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Validation of parsed format strings against method arguments.
//!
//! # Printf Index Resolution
//!
//! Every argument-consuming conversion has an *effective index*:
//!
//! 1. `n$` uses `n` and does not advance the running index
//! 2. `%<` reuses the effective index of the previous conversion
//! 3. Anything else takes the next value of a running index starting at 1
//!
//! The effective index must fall inside the argument list and the argument's
//! type must satisfy the conversion's category. Arguments no conversion
//! refers to are tolerated here; the engine decides whether that matters.

use crate::format::{
    parse, ArgumentIndex, Conversion, ConversionCategory, ConversionSpec, FormatKind,
    FormatSpecPart, MessageFormatType, PlaceholderSpec,
};
use crate::model::{ArgumentType, TypeCategory};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub detail: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        ValidationResult {
            is_valid: true,
            detail: String::new(),
        }
    }

    pub fn invalid(detail: impl Into<String>) -> Self {
        ValidationResult {
            is_valid: false,
            detail: detail.into(),
        }
    }
}

/// Checks parsed format parts against an ordered list of argument types.
pub trait FormatValidator: Send + Sync {
    fn kind(&self) -> FormatKind;

    fn validate(&self, parts: &[FormatSpecPart], argument_types: &[ArgumentType]) -> ValidationResult;

    /// 0-based positions of the arguments the parts refer to.
    fn referenced_arguments(&self, parts: &[FormatSpecPart]) -> BTreeSet<usize>;

    /// Number of distinct argument slots referenced.
    fn argument_count(&self, parts: &[FormatSpecPart]) -> usize {
        self.referenced_arguments(parts).len()
    }

    /// Structural validation plus an exact argument count.
    fn validate_exact(&self, parts: &[FormatSpecPart], argument_types: &[ArgumentType]) -> ValidationResult {
        let result = self.validate(parts, argument_types);
        if !result.is_valid {
            return result;
        }
        let required = self.argument_count(parts);
        if required != argument_types.len() {
            return ValidationResult::invalid(format!(
                "Required {} argument(s) but {} provided",
                required,
                argument_types.len()
            ));
        }
        result
    }
}

pub struct PrintfValidator;
pub struct MessageFormatValidator;
pub struct NoFormatValidator;

static PRINTF: PrintfValidator = PrintfValidator;
static MESSAGE_FORMAT: MessageFormatValidator = MessageFormatValidator;
static NO_FORMAT: NoFormatValidator = NoFormatValidator;

/// Shared validator for a format kind.
pub fn validator_for(kind: FormatKind) -> &'static dyn FormatValidator {
    match kind {
        FormatKind::Printf => &PRINTF,
        FormatKind::MessageFormat => &MESSAGE_FORMAT,
        FormatKind::NoFormat => &NO_FORMAT,
    }
}

/// Resolves printf effective indices (1-based) in source order.
fn effective_indices(parts: &[FormatSpecPart]) -> Result<Vec<(usize, &ConversionSpec)>, String> {
    let mut resolved = Vec::new();
    let mut implicit = 0usize;
    let mut previous: Option<usize> = None;

    for spec in parts.iter().filter_map(FormatSpecPart::as_conversion) {
        if !spec.conversion.takes_argument() {
            continue;
        }
        let index = match spec.index {
            ArgumentIndex::Explicit(n) => n,
            ArgumentIndex::Implicit => {
                implicit += 1;
                implicit
            }
            ArgumentIndex::Previous => previous.ok_or_else(|| {
                format!(
                    "Conversion '{}' at position {} refers to a previous argument but none precedes it",
                    spec.text, spec.position
                )
            })?,
        };
        previous = Some(index);
        resolved.push((index, spec));
    }
    Ok(resolved)
}

fn accepts(category: ConversionCategory, argument: &ArgumentType) -> bool {
    match category {
        ConversionCategory::General | ConversionCategory::NoArgument => true,
        ConversionCategory::Character => argument.is(TypeCategory::Character),
        ConversionCategory::Integral => argument.is(TypeCategory::Integral),
        ConversionCategory::FloatingPoint => argument.is(TypeCategory::FloatingPoint),
        ConversionCategory::DateTime => argument.is(TypeCategory::Temporal),
    }
}

fn describe(category: ConversionCategory) -> &'static str {
    match category {
        ConversionCategory::General | ConversionCategory::NoArgument => "any value",
        ConversionCategory::Character => "a character",
        ConversionCategory::Integral => "an integral value",
        ConversionCategory::FloatingPoint => "a floating point value",
        ConversionCategory::DateTime => "a date/time value",
    }
}

impl FormatValidator for PrintfValidator {
    fn kind(&self) -> FormatKind {
        FormatKind::Printf
    }

    fn validate(&self, parts: &[FormatSpecPart], argument_types: &[ArgumentType]) -> ValidationResult {
        let resolved = match effective_indices(parts) {
            Ok(resolved) => resolved,
            Err(detail) => return ValidationResult::invalid(detail),
        };

        for (index, spec) in resolved {
            let Some(argument) = index.checked_sub(1).and_then(|i| argument_types.get(i)) else {
                return ValidationResult::invalid(format!(
                    "Conversion '{}' at position {} refers to argument {} but only {} argument(s) are available",
                    spec.text,
                    spec.position,
                    index,
                    argument_types.len()
                ));
            };
            let category = spec.conversion.category();
            if !accepts(category, argument) {
                return ValidationResult::invalid(format!(
                    "Conversion '{}' at position {} requires {} but argument {} is of type {}",
                    spec.text,
                    spec.position,
                    describe(category),
                    index,
                    argument.name
                ));
            }
        }
        ValidationResult::valid()
    }

    fn referenced_arguments(&self, parts: &[FormatSpecPart]) -> BTreeSet<usize> {
        effective_indices(parts)
            .map(|resolved| {
                resolved
                    .into_iter()
                    .map(|(index, _)| index.saturating_sub(1))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl FormatValidator for MessageFormatValidator {
    fn kind(&self) -> FormatKind {
        FormatKind::MessageFormat
    }

    fn validate(&self, parts: &[FormatSpecPart], argument_types: &[ArgumentType]) -> ValidationResult {
        for spec in parts.iter().filter_map(FormatSpecPart::as_placeholder) {
            let Some(argument) = argument_types.get(spec.index) else {
                return ValidationResult::invalid(format!(
                    "Placeholder '{}' at position {} refers to argument {} but only {} argument(s) are available",
                    spec.text,
                    spec.position,
                    spec.index,
                    argument_types.len()
                ));
            };
            if let Some(detail) = placeholder_mismatch(spec, argument) {
                return ValidationResult::invalid(detail);
            }
        }
        ValidationResult::valid()
    }

    fn referenced_arguments(&self, parts: &[FormatSpecPart]) -> BTreeSet<usize> {
        parts
            .iter()
            .filter_map(FormatSpecPart::as_placeholder)
            .map(|spec| spec.index)
            .collect()
    }
}

fn placeholder_mismatch(spec: &PlaceholderSpec, argument: &ArgumentType) -> Option<String> {
    let (fits, expected) = match spec.format_type? {
        MessageFormatType::Number | MessageFormatType::Choice => (
            argument.is(TypeCategory::Integral) || argument.is(TypeCategory::FloatingPoint),
            "a numeric value",
        ),
        MessageFormatType::Date | MessageFormatType::Time => {
            (argument.is(TypeCategory::Temporal), "a date/time value")
        }
    };
    (!fits).then(|| {
        format!(
            "Placeholder '{}' at position {} requires {} but argument {} is of type {}",
            spec.text, spec.position, expected, spec.index, argument.name
        )
    })
}

impl FormatValidator for NoFormatValidator {
    fn kind(&self) -> FormatKind {
        FormatKind::NoFormat
    }

    fn validate(&self, _parts: &[FormatSpecPart], _argument_types: &[ArgumentType]) -> ValidationResult {
        ValidationResult::valid()
    }

    fn referenced_arguments(&self, _parts: &[FormatSpecPart]) -> BTreeSet<usize> {
        BTreeSet::new()
    }
}

/// Conversion shape of a format used to compare a translation with its original.
#[derive(Debug, PartialEq, Eq)]
struct Shape {
    slots: BTreeMap<usize, String>,
    line_separators: usize,
}

fn shape_of(kind: FormatKind, parts: &[FormatSpecPart]) -> Result<Shape, String> {
    let mut slots = BTreeMap::new();
    let mut line_separators = 0;
    match kind {
        FormatKind::Printf => {
            line_separators = parts
                .iter()
                .filter_map(FormatSpecPart::as_conversion)
                .filter(|spec| spec.conversion == Conversion::LineSeparator)
                .count();
            for (index, spec) in effective_indices(parts)? {
                slots
                    .entry(index)
                    .or_insert_with(|| spec.conversion.as_char().to_string());
            }
        }
        FormatKind::MessageFormat => {
            for spec in parts.iter().filter_map(FormatSpecPart::as_placeholder) {
                slots
                    .entry(spec.index)
                    .or_insert_with(|| format!("{:?}", spec.format_type));
            }
        }
        FormatKind::NoFormat => {}
    }
    Ok(Shape {
        slots,
        line_separators,
    })
}

/// Checks that a translated text uses the same conversions as the original.
///
/// Conversions are compared per effective index (first occurrence wins) so a
/// translation may reorder arguments freely, and the count of `%n` must match.
pub fn validate_translation(kind: FormatKind, original: &str, translated: &str) -> ValidationResult {
    let original_parts = match parse(original, kind) {
        Ok(spec) => spec.parts,
        Err(e) => {
            return ValidationResult::invalid(format!(
                "Format '{}' appears to be invalid. Error: {}",
                original, e
            ))
        }
    };
    let translated_parts = match parse(translated, kind) {
        Ok(spec) => spec.parts,
        Err(e) => {
            return ValidationResult::invalid(format!(
                "Translation '{}' appears to be invalid. Error: {}",
                translated, e
            ))
        }
    };

    let shapes = shape_of(kind, &original_parts).and_then(|original_shape| {
        shape_of(kind, &translated_parts).map(|translated_shape| (original_shape, translated_shape))
    });
    match shapes {
        Err(detail) => ValidationResult::invalid(detail),
        Ok((original_shape, translated_shape)) if original_shape != translated_shape => {
            ValidationResult::invalid(format!(
                "The translation '{}' does not match the conversions of '{}'",
                translated, original
            ))
        }
        Ok(_) => ValidationResult::valid(),
    }
}
