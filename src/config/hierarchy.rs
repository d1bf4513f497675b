// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Arena of interface nodes and their extension edges.
//!
//! Built once per batch after the declaration graph has been validated. Each
//! node knows the interfaces it extends; from that the hierarchy derives:
//!
//! * the resolution closure of an interface (itself, then its ancestors in
//!   depth-first preorder, pass-through logger bases excluded)
//! * extension distances between an interface and each of its ancestors,
//!   used to pick the nearest declaring method when an id is inherited
//! * the flattened method list the engine resolves, with methods reached
//!   through several paths collapsed to their first occurrence

use crate::config::{Config, InterfaceDeclaration, MethodDeclaration};
use crate::errors::EngineError;
use std::collections::{HashMap, HashSet, VecDeque};

#[derive(Debug, Clone)]
struct InterfaceNode {
    name: String,
    extends: Vec<usize>,
    is_logger_base: bool,
    /// Position in `Config::interfaces`; `None` for undeclared logger bases.
    declaration: Option<usize>,
}

/// Methods an interface resolves, plus the ones it hands to a logger base.
#[derive(Debug, Clone)]
pub struct FlattenedMethods<'c> {
    pub methods: Vec<(&'c InterfaceDeclaration, &'c MethodDeclaration)>,
    pub delegated: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct InterfaceHierarchy {
    nodes: Vec<InterfaceNode>,
    index: HashMap<String, usize>,
    /// Per node: ancestor node -> number of extension edges to reach it.
    distances: Vec<HashMap<usize, usize>>,
}

impl InterfaceHierarchy {
    /// Builds the arena. Unknown `extends` entries become undeclared nodes;
    /// rejecting them is the job of `validate_declaration_graph`.
    pub fn build(config: &Config) -> Self {
        let mut nodes: Vec<InterfaceNode> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (position, declaration) in config.interfaces.iter().enumerate() {
            let id = node_id(&mut nodes, &mut index, &declaration.name, config);
            nodes[id].declaration = Some(position);
        }
        for declaration in &config.interfaces {
            let id = index[&declaration.name];
            let extends: Vec<usize> = declaration
                .extends
                .iter()
                .map(|name| node_id(&mut nodes, &mut index, name, config))
                .collect();
            nodes[id].extends = extends;
        }

        let distances = (0..nodes.len()).map(|start| bfs_distances(&nodes, start)).collect();

        InterfaceHierarchy {
            nodes,
            index,
            distances,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    fn id_of(&self, name: &str) -> Result<usize, EngineError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::UnknownInterface {
                interface: name.to_string(),
            })
    }

    pub fn is_logger_base(&self, name: &str) -> bool {
        self.index
            .get(name)
            .map_or(false, |id| self.nodes[*id].is_logger_base)
    }

    /// Interfaces resolved for `name`: itself first, then ancestors in
    /// depth-first preorder. Logger bases are not part of the closure.
    pub fn closure(&self, name: &str) -> Result<Vec<&str>, EngineError> {
        let (members, _) = self.walk(self.id_of(name)?);
        Ok(members.into_iter().map(|id| self.nodes[id].name.as_str()).collect())
    }

    /// Logger bases reachable from `name`.
    pub fn logger_bases(&self, name: &str) -> Result<Vec<&str>, EngineError> {
        let (_, bases) = self.walk(self.id_of(name)?);
        Ok(bases.into_iter().map(|id| self.nodes[id].name.as_str()).collect())
    }

    fn walk(&self, start: usize) -> (Vec<usize>, Vec<usize>) {
        let mut members = Vec::new();
        let mut bases = Vec::new();
        let mut seen = HashSet::new();
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            if self.nodes[id].is_logger_base {
                bases.push(id);
                continue;
            }
            members.push(id);
            // Reverse so the first extended interface is visited first.
            stack.extend(self.nodes[id].extends.iter().rev().copied());
        }
        (members, bases)
    }

    /// Extension edges from `from` up to `to`; `Some(0)` when they are the same.
    pub fn distance(&self, from: &str, to: &str) -> Option<usize> {
        let from = *self.index.get(from)?;
        let to = *self.index.get(to)?;
        self.distances[from].get(&to).copied()
    }

    /// Declared plus inherited methods of `name`, in closure order.
    ///
    /// A method whose signature (name, parameter types, return type) was
    /// already collected through another path is skipped. Methods of declared
    /// logger bases are only listed as delegated.
    pub fn flattened_methods<'c>(
        &self,
        config: &'c Config,
        name: &str,
    ) -> Result<FlattenedMethods<'c>, EngineError> {
        let (members, bases) = self.walk(self.id_of(name)?);

        let mut seen = HashSet::new();
        let mut methods = Vec::new();
        for id in members {
            let declaration = self.declaration(config, id, name)?;
            for method in &declaration.methods {
                if seen.insert(signature_key(method)) {
                    methods.push((declaration, method));
                }
            }
        }

        let mut delegated = Vec::new();
        for id in bases {
            if let Some(position) = self.nodes[id].declaration {
                if let Some(base) = config.interfaces.get(position) {
                    delegated.extend(base.methods.iter().map(signature_key));
                }
            }
        }

        Ok(FlattenedMethods { methods, delegated })
    }

    fn declaration<'c>(
        &self,
        config: &'c Config,
        id: usize,
        requested: &str,
    ) -> Result<&'c InterfaceDeclaration, EngineError> {
        let node = &self.nodes[id];
        node.declaration
            .and_then(|position| config.interfaces.get(position))
            .filter(|declaration| declaration.name == node.name)
            .ok_or_else(|| EngineError::IncompleteClosure {
                interface: requested.to_string(),
                method: String::new(),
                declaring: node.name.clone(),
            })
    }
}

fn node_id(
    nodes: &mut Vec<InterfaceNode>,
    index: &mut HashMap<String, usize>,
    name: &str,
    config: &Config,
) -> usize {
    if let Some(id) = index.get(name) {
        return *id;
    }
    let id = nodes.len();
    nodes.push(InterfaceNode {
        name: name.to_string(),
        extends: Vec::new(),
        is_logger_base: config.engine.is_logger_base(name),
        declaration: None,
    });
    index.insert(name.to_string(), id);
    id
}

fn bfs_distances(nodes: &[InterfaceNode], start: usize) -> HashMap<usize, usize> {
    let mut distances = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);

    while let Some(id) = queue.pop_front() {
        let next = distances[&id] + 1;
        for &parent in &nodes[id].extends {
            if !distances.contains_key(&parent) {
                distances.insert(parent, next);
                queue.push_back(parent);
            }
        }
    }
    distances
}

/// `name(type, type): return` as declared.
fn signature_key(method: &MethodDeclaration) -> String {
    let types: Vec<String> = method
        .parameters
        .iter()
        .map(|p| {
            if p.varargs {
                format!("{}...", p.type_name)
            } else if p.array {
                format!("{}[]", p.type_name)
            } else {
                p.type_name.clone()
            }
        })
        .collect();
    format!("{}({}): {}", method.name, types.join(", "), method.return_type)
}
