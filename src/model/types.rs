// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Precomputed type hierarchy for one batch.
//!
//! The catalog answers assignability questions (is this a String, a
//! Throwable, a checked exception, an integral value) from a subtype-closure
//! table built once from the built-in JDK types plus the batch's own
//! declarations. Nothing walks the hierarchy after construction.

use crate::config::consts::builtin_types;
use crate::config::{TypeDeclaration, TypeRoots};
use crate::model::{ConstructionSignature, ConstructorShape, ReturnType, ThrowableType};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Value categories a format conversion can require of its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeCategory {
    Integral,
    FloatingPoint,
    Character,
    Temporal,
}

/// A format argument as seen by a format validator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgumentType {
    pub name: String,
    pub categories: BTreeSet<TypeCategory>,
}

impl ArgumentType {
    /// An argument with no special category; accepted only by general conversions.
    pub fn general(name: &str) -> Self {
        ArgumentType {
            name: name.to_string(),
            categories: BTreeSet::new(),
        }
    }

    pub fn is(&self, category: TypeCategory) -> bool {
        self.categories.contains(&category)
    }
}

#[derive(Debug, Clone)]
pub struct TypeCatalog {
    supertypes: HashMap<String, BTreeSet<String>>,
    constructors: HashMap<String, BTreeSet<ConstructorShape>>,
    roots: TypeRoots,
}

impl Default for TypeCatalog {
    fn default() -> Self {
        TypeCatalog::build(&[], &TypeRoots::default())
    }
}

impl TypeCatalog {
    /// Builds the closure table. Declarations override built-in types of the same name.
    pub fn build(declarations: &[TypeDeclaration], roots: &TypeRoots) -> Self {
        let mut direct: HashMap<String, Vec<String>> = HashMap::new();
        let mut constructors = HashMap::new();

        let builtins = builtin_types();
        for declaration in builtins.iter().chain(declarations.iter()) {
            direct.insert(declaration.name.clone(), declaration.supertypes.clone());
            constructors.insert(
                declaration.name.clone(),
                declaration.constructors.iter().copied().collect(),
            );
        }

        let mut supertypes = HashMap::with_capacity(direct.len());
        for name in direct.keys() {
            let mut visiting = HashSet::new();
            collect_supertypes(name, &direct, &mut supertypes, &mut visiting);
        }

        TypeCatalog {
            supertypes,
            constructors,
            roots: roots.clone(),
        }
    }

    pub fn is_subtype_of(&self, sub: &str, sup: &str) -> bool {
        sub == sup
            || self
                .supertypes
                .get(sub)
                .map_or(false, |closure| closure.contains(sup))
    }

    fn is_subtype_of_any(&self, name: &str, candidates: &[String]) -> bool {
        candidates.iter().any(|c| self.is_subtype_of(name, c))
    }

    pub fn is_void(&self, name: &str) -> bool {
        name == self.roots.void_type
    }

    pub fn is_string(&self, name: &str) -> bool {
        self.is_subtype_of(name, &self.roots.string_type)
    }

    pub fn is_throwable(&self, name: &str) -> bool {
        self.is_subtype_of(name, &self.roots.throwable_type)
    }

    /// Throwables that must be declared, i.e. not under an unchecked root.
    pub fn is_checked(&self, name: &str) -> bool {
        self.is_throwable(name) && !self.is_subtype_of_any(name, &self.roots.unchecked_types)
    }

    pub fn is_primitive(&self, name: &str) -> bool {
        self.roots.primitive_types.iter().any(|p| p == name)
    }

    pub fn constructors_of(&self, name: &str) -> BTreeSet<ConstructorShape> {
        self.constructors.get(name).cloned().unwrap_or_default()
    }

    /// Categories of a format argument. Arrays only fit general conversions.
    pub fn categories(&self, name: &str, is_array: bool) -> BTreeSet<TypeCategory> {
        let mut categories = BTreeSet::new();
        if is_array {
            return categories;
        }
        let table = [
            (TypeCategory::Integral, &self.roots.integral_types),
            (TypeCategory::FloatingPoint, &self.roots.floating_point_types),
            (TypeCategory::Character, &self.roots.character_types),
            (TypeCategory::Temporal, &self.roots.temporal_types),
        ];
        for (category, roots) in table {
            if self.is_subtype_of_any(name, roots) {
                categories.insert(category);
            }
        }
        categories
    }

    pub fn argument_type(&self, name: &str, is_array: bool) -> ArgumentType {
        ArgumentType {
            name: if is_array {
                format!("{}[]", name)
            } else {
                name.to_string()
            },
            categories: self.categories(name, is_array),
        }
    }

    pub fn throwable(&self, name: &str, signature: Option<ConstructionSignature>) -> ThrowableType {
        ThrowableType {
            name: name.to_string(),
            constructors: self.constructors_of(name),
            construction_signature: signature,
            is_checked: self.is_checked(name),
        }
    }

    pub fn return_type(&self, name: &str, signature: Option<ConstructionSignature>) -> ReturnType {
        if self.is_void(name) {
            ReturnType::Void
        } else if self.is_string(name) {
            ReturnType::String {
                name: name.to_string(),
            }
        } else if self.is_throwable(name) {
            ReturnType::Throwable(self.throwable(name, signature))
        } else {
            ReturnType::Other {
                name: name.to_string(),
            }
        }
    }
}

fn collect_supertypes(
    name: &str,
    direct: &HashMap<String, Vec<String>>,
    memo: &mut HashMap<String, BTreeSet<String>>,
    visiting: &mut HashSet<String>,
) -> BTreeSet<String> {
    if let Some(done) = memo.get(name) {
        return done.clone();
    }
    // A cycle in user declarations simply stops the walk.
    if !visiting.insert(name.to_string()) {
        return BTreeSet::new();
    }

    let mut closure = BTreeSet::new();
    if let Some(parents) = direct.get(name) {
        for parent in parents {
            closure.insert(parent.clone());
            closure.extend(collect_supertypes(parent, direct, memo, visiting));
        }
    }

    visiting.remove(name);
    memo.insert(name.to_string(), closure.clone());
    closure
}
