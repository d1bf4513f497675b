// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::TypeDeclaration;
use crate::model::ConstructorShape;

/// Fallback worker count when available parallelism cannot be determined
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;
/// Pass-through logger base whose methods are delegated rather than resolved
pub const DEFAULT_LOGGER_BASE: &str = "org.jboss.logging.BasicLogger";
/// Shortest explicit id padding length
pub const MIN_ID_LENGTH: u8 = 3;
/// Longest explicit id padding length
pub const MAX_ID_LENGTH: u8 = 8;
/// Suffix of the generated raw-message accessor
pub const MESSAGE_METHOD_SUFFIX: &str = "$str";
/// Return type name meaning "returns nothing"
pub const DEFAULT_VOID_TYPE: &str = "void";
pub const DEFAULT_STRING_TYPE: &str = "java.lang.String";
pub const DEFAULT_THROWABLE_TYPE: &str = "java.lang.Throwable";

pub const DEFAULT_UNCHECKED_TYPES: &[&str] = &["java.lang.RuntimeException", "java.lang.Error"];

pub const DEFAULT_PRIMITIVE_TYPES: &[&str] = &[
    "boolean", "byte", "char", "short", "int", "long", "float", "double",
];

pub const DEFAULT_INTEGRAL_TYPES: &[&str] = &[
    "byte",
    "short",
    "int",
    "long",
    "java.lang.Byte",
    "java.lang.Short",
    "java.lang.Integer",
    "java.lang.Long",
    "java.math.BigInteger",
];

pub const DEFAULT_FLOATING_POINT_TYPES: &[&str] = &[
    "float",
    "double",
    "java.lang.Float",
    "java.lang.Double",
    "java.math.BigDecimal",
];

/// Types `%c` accepts; int-sized values are code points
pub const DEFAULT_CHARACTER_TYPES: &[&str] = &[
    "char",
    "java.lang.Character",
    "byte",
    "java.lang.Byte",
    "short",
    "java.lang.Short",
    "int",
    "java.lang.Integer",
];

/// Types `%t` accepts; longs are epoch milliseconds
pub const DEFAULT_TEMPORAL_TYPES: &[&str] = &[
    "long",
    "java.lang.Long",
    "java.util.Date",
    "java.util.Calendar",
    "java.time.temporal.TemporalAccessor",
];

const ALL_CONSTRUCTORS: &[ConstructorShape] = &[
    ConstructorShape::Default,
    ConstructorShape::String,
    ConstructorShape::Throwable,
    ConstructorShape::StringThrowable,
];

/// JDK types every batch can refer to without declaring them.
pub fn builtin_types() -> Vec<TypeDeclaration> {
    let declare = |name: &str, supertypes: &[&str], constructors: &[ConstructorShape]| {
        TypeDeclaration {
            name: name.to_string(),
            supertypes: supertypes.iter().map(|s| s.to_string()).collect(),
            constructors: constructors.to_vec(),
        }
    };

    vec![
        declare("java.lang.Object", &[], &[]),
        declare("java.lang.String", &["java.lang.Object", "java.lang.CharSequence"], &[]),
        declare(DEFAULT_THROWABLE_TYPE, &["java.lang.Object"], ALL_CONSTRUCTORS),
        declare("java.lang.Exception", &[DEFAULT_THROWABLE_TYPE], ALL_CONSTRUCTORS),
        declare("java.lang.Error", &[DEFAULT_THROWABLE_TYPE], ALL_CONSTRUCTORS),
        declare("java.lang.RuntimeException", &["java.lang.Exception"], ALL_CONSTRUCTORS),
        declare("java.lang.IllegalArgumentException", &["java.lang.RuntimeException"], ALL_CONSTRUCTORS),
        declare("java.lang.IllegalStateException", &["java.lang.RuntimeException"], ALL_CONSTRUCTORS),
        declare("java.lang.UnsupportedOperationException", &["java.lang.RuntimeException"], ALL_CONSTRUCTORS),
        declare("java.io.IOException", &["java.lang.Exception"], ALL_CONSTRUCTORS),
        declare(
            "java.io.UncheckedIOException",
            &["java.lang.RuntimeException"],
            &[ConstructorShape::Throwable, ConstructorShape::StringThrowable],
        ),
        declare("java.lang.Number", &["java.lang.Object"], &[]),
        declare("java.math.BigInteger", &["java.lang.Number"], &[]),
        declare("java.math.BigDecimal", &["java.lang.Number"], &[]),
        declare("java.util.Date", &["java.lang.Object"], &[]),
        declare("java.util.Calendar", &["java.lang.Object"], &[]),
        declare("java.time.Instant", &["java.time.temporal.TemporalAccessor"], &[]),
        declare("java.time.LocalDate", &["java.time.temporal.TemporalAccessor"], &[]),
        declare("java.time.LocalDateTime", &["java.time.temporal.TemporalAccessor"], &[]),
        declare("java.time.ZonedDateTime", &["java.time.temporal.TemporalAccessor"], &[]),
    ]
}
