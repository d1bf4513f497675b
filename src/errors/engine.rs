// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Internal invariant violations. These abort a run; problems in the
/// declarations themselves are reported as diagnostics instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The interface is not part of the hierarchy built for the batch
    #[error("Interface '{interface}' is not part of the resolved hierarchy")]
    UnknownInterface { interface: String },

    /// A method was declared by an interface outside the closure being resolved
    #[error("Method '{method}' is declared by '{declaring}' which is not in the closure of '{interface}'")]
    IncompleteClosure {
        interface: String,
        method: String,
        declaring: String,
    },

    /// A blocking worker panicked or was cancelled
    #[error("Worker for interface '{interface}' failed: {reason}")]
    WorkerFailed { interface: String, reason: String },
}
