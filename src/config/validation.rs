// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structural validation of a declaration batch.
//!
//! The engine needs the complete, acyclic extension closure of every
//! interface before it can flatten methods and resolve inheritance, so the
//! batch is checked before anything else runs:
//!
//! 1. **Uniqueness**: interface names and declared type names are unique
//! 2. **References**: every `extends` entry names a declared interface or a
//!    pass-through logger base
//! 3. **Cycles**: no interface reaches itself through `extends`
//!
//! Cycle detection only runs when the first two stages pass, since it needs
//! every edge to point at a known node.
//!
//! # Cycle Detection Algorithm
//! DFS with a recursion stack over the `extends` edges:
//! - **Time Complexity**: O(V + E) where V = interfaces, E = extension edges
//! - **Space Complexity**: O(V) for the visited set and recursion stack
//! - Reports the actual cycle path, e.g. `a.A -> a.B -> a.A`
//!
//! Roots are visited in declaration order so the reported cycle is stable
//! from run to run.
//!
//! # Example
//! ```rust
//! use the_logsmith::config::{validate_declaration_graph, Config};
//! use the_logsmith::errors::ValidationError;
//!
//! let config: Config = serde_yaml::from_str(r#"
//! interfaces:
//!   - { name: a.A, kind: bundle, extends: [a.B] }
//!   - { name: a.B, kind: bundle, extends: [a.A] }
//! "#).unwrap();
//!
//! let errors = validate_declaration_graph(&config).unwrap_err();
//! assert!(matches!(errors[0], ValidationError::CyclicExtension { .. }));
//! ```

use crate::config::Config;
use crate::errors::ValidationError;
use crate::observability::messages::validation::{
    CyclicExtensionDetected, DuplicateInterface, UnresolvedInterface,
};
use crate::observability::messages::StructuredLog;
use std::collections::{HashMap, HashSet};

/// Validates the interface extension graph of a batch.
///
/// # Returns
///
/// * `Ok(())` - The graph is complete and acyclic
/// * `Err(Vec<ValidationError>)` - Every problem found; cycle detection is
///   skipped while uniqueness or reference errors exist
pub fn validate_declaration_graph(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(duplicate_errors) = validate_unique_names(config) {
        errors.extend(duplicate_errors);
    }

    if let Err(unresolved_errors) = validate_extension_references(config) {
        errors.extend(unresolved_errors);
    }

    if errors.is_empty() {
        if let Err(cycle_errors) = validate_acyclic_extension(config) {
            errors.extend(cycle_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_unique_names(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen_interfaces = HashSet::new();
    for interface in &config.interfaces {
        if !seen_interfaces.insert(&interface.name) {
            DuplicateInterface {
                interface: &interface.name,
            }
            .log();
            errors.push(ValidationError::DuplicateInterface {
                interface: interface.name.clone(),
            });
        }
    }

    let mut seen_types = HashSet::new();
    for declaration in &config.types {
        if !seen_types.insert(&declaration.name) {
            errors.push(ValidationError::DuplicateType {
                type_name: declaration.name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Every `extends` entry must be declared in the batch or be a logger base.
fn validate_extension_references(config: &Config) -> Result<(), Vec<ValidationError>> {
    let declared: HashSet<&String> = config.interfaces.iter().map(|i| &i.name).collect();
    let mut errors = Vec::new();

    for interface in &config.interfaces {
        for extended in &interface.extends {
            if !declared.contains(extended) && !config.engine.is_logger_base(extended) {
                UnresolvedInterface {
                    interface: &interface.name,
                    missing_interface: extended,
                }
                .log();
                errors.push(ValidationError::UnresolvedInterface {
                    interface: interface.name.clone(),
                    missing_interface: extended.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_acyclic_extension(config: &Config) -> Result<(), Vec<ValidationError>> {
    // Logger bases are leaves: nothing they extend is part of the batch.
    let graph: HashMap<&str, Vec<&str>> = config
        .interfaces
        .iter()
        .map(|i| (i.name.as_str(), i.extends.iter().map(String::as_str).collect()))
        .collect();

    let mut visited = HashSet::new();
    let mut rec_stack = HashSet::new();
    let mut path = Vec::new();

    for interface in &config.interfaces {
        if !visited.contains(interface.name.as_str()) {
            if let Some(cycle) = dfs_cycle_detection(
                &interface.name,
                &graph,
                &mut visited,
                &mut rec_stack,
                &mut path,
            ) {
                let display: Vec<&str> = cycle.iter().map(String::as_str).collect();
                CyclicExtensionDetected { cycle: &display }.log();
                return Err(vec![ValidationError::CyclicExtension { cycle }]);
            }
        }
    }

    Ok(())
}

/// DFS over `extends` edges; returns the cycle path when a back edge is found.
fn dfs_cycle_detection<'a>(
    node: &'a str,
    graph: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    rec_stack: &mut HashSet<&'a str>,
    path: &mut Vec<&'a str>,
) -> Option<Vec<String>> {
    visited.insert(node);
    rec_stack.insert(node);
    path.push(node);

    if let Some(neighbors) = graph.get(node) {
        for &neighbor in neighbors {
            if !visited.contains(neighbor) {
                if let Some(cycle) = dfs_cycle_detection(neighbor, graph, visited, rec_stack, path) {
                    return Some(cycle);
                }
            } else if rec_stack.contains(neighbor) {
                let cycle_start = path.iter().position(|x| *x == neighbor).unwrap_or(0);
                let mut cycle: Vec<String> = path[cycle_start..].iter().map(|s| s.to_string()).collect();
                cycle.push(neighbor.to_string());
                return Some(cycle);
            }
        }
    }

    rec_stack.remove(node);
    path.pop();
    None
}
