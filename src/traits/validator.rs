// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::validation::{Diagnostic, ValidationContext};

/// Whether a validator looks at one interface at a time or the whole batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorScope {
    /// Independent per interface; safe to run on concurrent workers.
    Interface,
    /// Compares interfaces with each other; runs once all are resolved.
    Batch,
}

/// A single check in the validation pipeline.
///
/// Validators are independent: each runs to completion over the context it
/// is given and returns every problem it finds. None of them short-circuits
/// the pipeline.
pub trait Validator: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    fn scope(&self) -> ValidatorScope {
        ValidatorScope::Interface
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic>;
}
