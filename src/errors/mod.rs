// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod engine;
mod format;
mod resolution;

pub use config::{ConfigError, ValidationError};
pub use engine::EngineError;
pub use format::ParseError;
pub use resolution::ResolutionFailure;
