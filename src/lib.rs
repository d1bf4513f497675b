// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // declarations, loader, hierarchy
pub mod engine;     // model building, resolution, sessions
pub mod errors;     // error handling
pub mod format;     // printf / MessageFormat parsing
pub mod model;      // immutable interface models
pub mod observability;
pub mod traits;     // unified abstractions
pub mod validation; // diagnostics pipeline
