// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod builder;
pub mod classifier;
pub mod descriptor;
pub mod resolver;
pub mod runner;
pub mod session;
#[cfg(test)]
mod integration_tests;

pub use builder::build_interface;
pub use classifier::classify;
pub use descriptor::{ConstructionStrategy, Resolution, ResolvedMethodDescriptor};
pub use resolver::MethodDescriptorResolver;
pub use runner::run_concurrently;
pub use session::{BatchReport, InterfaceOutcome, InterfaceReport, Session};
