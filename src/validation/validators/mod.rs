// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The standard validators, one per file.

pub mod cause;
pub mod exception_constructor;
pub mod format;
pub mod id_length;
pub mod id_range;
pub mod message_annotation;
pub mod message_id;
pub mod parameter_count;
pub mod project_id;
pub mod resolution;
pub mod return_type;
pub mod thrown_types;
pub mod translation;

pub use cause::CauseValidator;
pub use exception_constructor::ExceptionConstructorValidator;
pub use format::FormatStringValidator;
pub use id_length::IdLengthValidator;
pub use id_range::IdRangeValidator;
pub use message_annotation::MessageAnnotationValidator;
pub use message_id::MessageIdValidator;
pub use parameter_count::ParameterCountValidator;
pub use project_id::ProjectIdValidator;
pub use resolution::ResolutionValidator;
pub use return_type::ReturnTypeValidator;
pub use thrown_types::ThrownTypesValidator;
pub use translation::TranslationValidator;

use crate::traits::Validator;

/// The pipeline in execution order.
pub fn standard() -> Vec<Box<dyn Validator>> {
    vec![
        Box::new(ReturnTypeValidator),
        Box::new(ExceptionConstructorValidator),
        Box::new(MessageAnnotationValidator),
        Box::new(ParameterCountValidator),
        Box::new(MessageIdValidator),
        Box::new(CauseValidator),
        Box::new(FormatStringValidator),
        Box::new(ResolutionValidator),
        Box::new(ThrownTypesValidator),
        Box::new(TranslationValidator),
        Box::new(IdRangeValidator),
        Box::new(IdLengthValidator),
        Box::new(ProjectIdValidator),
    ]
}
