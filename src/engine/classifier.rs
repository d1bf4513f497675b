// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Parameter role assignment.
//!
//! Roles follow from the declared markers alone, first match wins:
//!
//! | marker          | role           |
//! |-----------------|----------------|
//! | `cause`         | `Cause`        |
//! | `field`         | `Field`        |
//! | `property`      | `Property`     |
//! | `param`         | `Construction` |
//! | `logging_class` | `Fqcn`         |
//! | none            | `Format`       |
//!
//! More than one cause is allowed here; the cause validator reports it.

use crate::config::ParameterDeclaration;
use crate::model::{Parameter, ParameterRole, TypeCatalog};

pub fn classify(parameters: &[ParameterDeclaration], catalog: &TypeCatalog) -> Vec<Parameter> {
    parameters.iter().map(|p| classify_one(p, catalog)).collect()
}

fn classify_one(declaration: &ParameterDeclaration, catalog: &TypeCatalog) -> Parameter {
    let field = declaration
        .field
        .as_ref()
        .and_then(|target| target.resolve(&declaration.name));
    let property = declaration
        .property
        .as_ref()
        .and_then(|target| target.resolve(&declaration.name));

    let (role, target_name) = if declaration.cause {
        (ParameterRole::Cause, None)
    } else if let Some(member) = field {
        (ParameterRole::Field, Some(member))
    } else if let Some(member) = property {
        (ParameterRole::Property, Some(setter_name(&member)))
    } else if declaration.param {
        (ParameterRole::Construction, None)
    } else if declaration.logging_class {
        (ParameterRole::Fqcn, None)
    } else {
        (ParameterRole::Format, None)
    };

    Parameter {
        name: declaration.name.clone(),
        type_name: declaration.type_name.clone(),
        is_array: declaration.array,
        is_primitive: !declaration.array && !declaration.varargs && catalog.is_primitive(&declaration.type_name),
        is_varargs: declaration.varargs,
        role,
        target_name,
        formatter_class: declaration.format_with.clone(),
        positions: declaration.positions.clone(),
        transforms: declaration.transforms.clone(),
    }
}

fn setter_name(member: &str) -> String {
    let mut chars = member.chars();
    match chars.next() {
        Some(first) => format!("set{}{}", first.to_uppercase(), chars.as_str()),
        None => "set".to_string(),
    }
}

/// Arguments that feed the format: one per format parameter, or one per
/// position of a positional one. Cause, construction, field, property and
/// logging-class parameters supply none.
pub fn format_parameter_count(parameters: &[Parameter]) -> usize {
    parameters.iter().map(Parameter::format_slot_count).sum()
}
