// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Format parameter counts of same-named methods.
//!
//! A method without its own message can only borrow one from a sibling with
//! the same number of format parameters. This validator reports every method
//! left without a message, once. Within each name group the reference count
//! is the most common count among the methods that carry a message, or among
//! all methods when none does; ties go to the count seen first. A method
//! whose count differs from its reference method is reported against it,
//! any other method simply as missing its message.

use crate::errors::ResolutionFailure;
use crate::model::MessageMethod;
use crate::traits::Validator;
use crate::validation::{Diagnostic, Subject, ValidationContext};

pub struct ParameterCountValidator;

impl Validator for ParameterCountValidator {
    fn name(&self) -> &'static str {
        "parameter_count"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for resolved in ctx.interfaces {
            let interface = &resolved.interface;
            let groups = name_groups(&interface.methods);
            for (method, resolution) in resolved.methods() {
                let Some(missing) = resolution
                    .failures
                    .iter()
                    .find(|f| matches!(f, ResolutionFailure::MissingMessage { .. }))
                else {
                    continue;
                };

                let reference = groups
                    .iter()
                    .find(|g| g[0].name == method.name)
                    .and_then(|group| group_reference(group))
                    .filter(|r| r.format_parameter_count != method.format_parameter_count);

                let text = match reference {
                    Some(reference) => format!(
                        "The number of format parameters ({}) does not match {} which has {}.",
                        method.format_parameter_count,
                        reference.signature(),
                        reference.format_parameter_count
                    ),
                    None => missing.to_string(),
                };
                diagnostics.push(Diagnostic::error(Subject::of_method(interface, method), text));
            }
        }
        diagnostics
    }
}

/// Reference method of a name group, preferring methods with a message.
fn group_reference<'m>(group: &[&'m MessageMethod]) -> Option<&'m MessageMethod> {
    let annotated: Vec<&'m MessageMethod> = group.iter().copied().filter(|m| m.message.is_some()).collect();
    if annotated.is_empty() {
        reference_method(group)
    } else {
        reference_method(&annotated)
    }
}

/// Methods grouped by name, groups in order of first appearance.
fn name_groups(methods: &[MessageMethod]) -> Vec<Vec<&MessageMethod>> {
    let mut groups: Vec<Vec<&MessageMethod>> = Vec::new();
    for method in methods {
        match groups.iter_mut().find(|g| g[0].name == method.name) {
            Some(group) => group.push(method),
            None => groups.push(vec![method]),
        }
    }
    groups
}

/// First method carrying the most common format parameter count.
fn reference_method<'m>(methods: &[&'m MessageMethod]) -> Option<&'m MessageMethod> {
    let mut best: Option<(&'m MessageMethod, usize)> = None;
    for &method in methods {
        let occurrences = methods
            .iter()
            .filter(|m| m.format_parameter_count == method.format_parameter_count)
            .count();
        if best.map_or(true, |(_, count)| occurrences > count) {
            best = Some((method, occurrences));
        }
    }
    best.map(|(method, _)| method)
}
