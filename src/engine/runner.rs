// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Concurrent batch runner.
//!
//! Interfaces are independent, so each one is processed on a blocking tokio
//! task. A semaphore bounds how many run at once. Results are collected in
//! the order the tasks were spawned, which is declaration order, so the
//! report matches `Session::run` exactly.

use crate::engine::session::{BatchReport, Session};
use crate::errors::EngineError;
use crate::observability::messages::engine::BatchStarted;
use crate::observability::messages::StructuredLog;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;

pub async fn run_concurrently(session: Arc<Session>, max_concurrency: usize) -> Result<BatchReport, EngineError> {
    let started = Instant::now();
    let names = session.interface_names();
    let max_concurrency = max_concurrency.max(1);
    BatchStarted {
        interface_count: names.len(),
        max_concurrency,
    }
    .log();

    let semaphore = Arc::new(Semaphore::new(max_concurrency));
    let mut tasks = Vec::with_capacity(names.len());

    for name in names {
        let session_clone = session.clone();
        let semaphore_clone = semaphore.clone();
        let interface = name.clone();
        let worker = name.clone();

        let task = tokio::spawn(async move {
            let _permit = semaphore_clone
                .acquire()
                .await
                .map_err(|e| EngineError::WorkerFailed {
                    interface: interface.clone(),
                    reason: format!("Failed to acquire semaphore permit: {}", e),
                })?;

            let outcome = tokio::task::spawn_blocking(move || session_clone.process_interface(&interface))
                .await
                .map_err(|e| EngineError::WorkerFailed {
                    interface: name.clone(),
                    reason: e.to_string(),
                })??;
            Ok::<_, EngineError>(outcome)
        });

        tasks.push((worker, task));
    }

    let mut outcomes = Vec::with_capacity(tasks.len());
    for (worker, task) in tasks {
        match task.await {
            Ok(outcome) => outcomes.push(outcome?),
            Err(join_error) => {
                return Err(EngineError::WorkerFailed {
                    interface: worker,
                    reason: format!("Task join error: {}", join_error),
                })
            }
        }
    }

    Ok(session.finish(outcomes, started))
}
