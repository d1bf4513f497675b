// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod declarations;
mod hierarchy;
mod loader;
mod validation;

pub mod consts;

pub use declarations::{
    IdDeclaration, IdKeyword, InterfaceDeclaration, MemberTarget, MessageDeclaration,
    MethodDeclaration, ParameterDeclaration, TypeDeclaration,
};
pub use hierarchy::{FlattenedMethods, InterfaceHierarchy};
pub use loader::{load_and_validate_config, load_config, Config, EngineOptions, TypeRoots};
pub use validation::validate_declaration_graph;
