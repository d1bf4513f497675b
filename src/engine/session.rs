// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! One processing run over a declaration batch.
//!
//! A `Session` owns everything that is shared read-only between interfaces:
//! the declarations, the type catalog, the interface hierarchy and the
//! validation pipeline. Each interface is built, resolved and validated on
//! its own by [`Session::process_interface`]; [`Session::finish`] then runs
//! the batch-wide validators and assembles the reports in declaration order.

use crate::config::{Config, EngineOptions, InterfaceHierarchy};
use crate::engine::builder::build_interface;
use crate::engine::descriptor::ResolvedMethodDescriptor;
use crate::engine::resolver::MethodDescriptorResolver;
use crate::errors::EngineError;
use crate::model::{InterfaceKind, TypeCatalog};
use crate::observability::messages::engine::{
    BatchCompleted, BatchStarted, GenerationBlocked, InterfaceProcessed,
};
use crate::observability::messages::validation::DiagnosticReported;
use crate::observability::messages::StructuredLog;
use crate::validation::{Diagnostic, ResolvedInterface, ValidationContext, ValidationEngine};
use serde::Serialize;
use std::time::Instant;

/// A resolved interface with its interface-scoped diagnostics.
#[derive(Debug, Clone)]
pub struct InterfaceOutcome {
    pub resolved: ResolvedInterface,
    pub diagnostics: Vec<Diagnostic>,
}

/// What a generator receives for one interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceReport {
    pub interface: String,
    pub kind: InterfaceKind,
    pub descriptors: Vec<ResolvedMethodDescriptor>,
    /// Signatures passed through to a logger base.
    pub delegated: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
    /// False when any diagnostic is an error.
    pub generation_allowed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub interfaces: Vec<InterfaceReport>,
}

impl BatchReport {
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.interfaces.iter().flat_map(|r| r.diagnostics.iter())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics().filter(|d| !d.is_error()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics().any(Diagnostic::is_error)
    }

    pub fn report(&self, interface: &str) -> Option<&InterfaceReport> {
        self.interfaces.iter().find(|r| r.interface == interface)
    }
}

pub struct Session {
    config: Config,
    catalog: TypeCatalog,
    hierarchy: InterfaceHierarchy,
    engine: ValidationEngine,
}

impl Session {
    /// Expects a batch that passed `validate_declaration_graph`.
    pub fn new(config: Config) -> Self {
        Self::with_engine(config, ValidationEngine::new())
    }

    pub fn with_engine(config: Config, engine: ValidationEngine) -> Self {
        let catalog = TypeCatalog::build(&config.types, &config.engine.type_roots);
        let hierarchy = InterfaceHierarchy::build(&config);
        Self {
            config,
            catalog,
            hierarchy,
            engine,
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.config.engine
    }

    /// Interfaces to process in declaration order. Logger bases are only
    /// delegated to and never processed themselves.
    pub fn interface_names(&self) -> Vec<String> {
        self.config
            .interfaces
            .iter()
            .filter(|i| !self.config.engine.is_logger_base(&i.name))
            .map(|i| i.name.clone())
            .collect()
    }

    pub fn resolve_interface(&self, name: &str) -> Result<ResolvedInterface, EngineError> {
        let interface = build_interface(&self.config, &self.hierarchy, &self.catalog, name)?;
        let resolutions = MethodDescriptorResolver::new(&self.hierarchy).resolve(&interface);
        Ok(ResolvedInterface {
            interface,
            resolutions,
        })
    }

    /// Builds, resolves and runs the interface-scoped validators for one interface.
    pub fn process_interface(&self, name: &str) -> Result<InterfaceOutcome, EngineError> {
        let resolved = self.resolve_interface(name)?;
        let diagnostics = self
            .engine
            .validate_interfaces(&self.context(std::slice::from_ref(&resolved)));

        InterfaceProcessed {
            interface: name,
            method_count: resolved.interface.methods.len(),
            diagnostic_count: diagnostics.len(),
        }
        .log();

        Ok(InterfaceOutcome {
            resolved,
            diagnostics,
        })
    }

    /// Runs the batch validators and assembles the reports.
    ///
    /// `outcomes` must be in declaration order; batch diagnostics are
    /// appended to the report of the interface they are about.
    pub fn finish(&self, outcomes: Vec<InterfaceOutcome>, started: Instant) -> BatchReport {
        let (resolved, mut diagnostics): (Vec<ResolvedInterface>, Vec<Vec<Diagnostic>>) = outcomes
            .into_iter()
            .map(|o| (o.resolved, o.diagnostics))
            .unzip();

        for diagnostic in self.engine.validate_batch(&self.context(&resolved)) {
            let owner = resolved
                .iter()
                .position(|r| r.interface.name == diagnostic.subject.interface());
            if let Some(owner) = owner {
                diagnostics[owner].push(diagnostic);
            }
        }

        let interfaces: Vec<InterfaceReport> = resolved
            .into_iter()
            .zip(diagnostics)
            .map(|(resolved, diagnostics)| into_report(resolved, diagnostics))
            .collect();
        let batch = BatchReport { interfaces };

        BatchCompleted {
            interface_count: batch.interfaces.len(),
            error_count: batch.error_count(),
            warning_count: batch.warning_count(),
            duration: started.elapsed(),
        }
        .log();

        batch
    }

    /// Processes every interface on the calling thread.
    pub fn run(&self) -> Result<BatchReport, EngineError> {
        let started = Instant::now();
        let names = self.interface_names();
        BatchStarted {
            interface_count: names.len(),
            max_concurrency: 1,
        }
        .log();

        let outcomes = names
            .iter()
            .map(|name| self.process_interface(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.finish(outcomes, started))
    }

    fn context<'a>(&'a self, interfaces: &'a [ResolvedInterface]) -> ValidationContext<'a> {
        ValidationContext {
            interfaces,
            catalog: &self.catalog,
            options: &self.config.engine,
        }
    }
}

fn into_report(resolved: ResolvedInterface, diagnostics: Vec<Diagnostic>) -> InterfaceReport {
    for diagnostic in &diagnostics {
        DiagnosticReported { diagnostic }.log();
    }

    let error_count = diagnostics.iter().filter(|d| d.is_error()).count();
    if error_count > 0 {
        GenerationBlocked {
            interface: &resolved.interface.name,
            error_count,
        }
        .log();
    }

    InterfaceReport {
        interface: resolved.interface.name,
        kind: resolved.interface.kind,
        descriptors: resolved.resolutions.into_iter().map(|r| r.descriptor).collect(),
        delegated: resolved.interface.delegated,
        diagnostics,
        generation_allowed: error_count == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BATCH: &str = r#"
interfaces:
  - name: org.jboss.logging.BasicLogger
    kind: logger
    methods:
      - name: info
        parameters: [{ name: message, type: java.lang.Object }]
  - name: a.Logger
    kind: logger
    project_code: AAA
    extends: [org.jboss.logging.BasicLogger]
    methods:
      - name: started
        log_level: info
        message: { value: "Started %s", id: 1 }
        parameters: [{ name: what, type: java.lang.String }]
  - name: a.Broken
    kind: logger
    project_code: AAA
    methods:
      - name: stopped
        log_level: info
        message: { value: "Stopped", id: 1 }
"#;

    fn session() -> Session {
        Session::new(serde_yaml::from_str(BATCH).expect("test batch should parse"))
    }

    #[test]
    fn test_logger_bases_are_not_processed() {
        assert_eq!(session().interface_names(), vec!["a.Logger", "a.Broken"]);
    }

    #[test]
    fn test_run_assembles_reports_in_order() {
        let batch = session().run().expect("run should succeed");
        let names: Vec<&str> = batch.interfaces.iter().map(|r| r.interface.as_str()).collect();
        assert_eq!(names, vec!["a.Logger", "a.Broken"]);

        let logger = batch.report("a.Logger").expect("report exists");
        assert!(logger.generation_allowed);
        assert_eq!(logger.delegated, vec!["info(java.lang.Object): void"]);
        assert_eq!(logger.descriptors.len(), 1);
        assert_eq!(logger.descriptors[0].message_method_name, "started$str");
    }

    #[test]
    fn test_batch_diagnostics_land_on_their_interface() {
        let batch = session().run().expect("run should succeed");
        let broken = batch.report("a.Broken").expect("report exists");
        assert!(!broken.generation_allowed);
        assert_eq!(broken.diagnostics.len(), 1);
        assert!(broken.diagnostics[0].text.contains("a.Logger#started(java.lang.String)"));
        assert!(batch.has_errors());
        assert_eq!(batch.error_count(), 1);
    }

    #[test]
    fn test_unknown_interface_is_an_engine_error() {
        assert!(matches!(
            session().process_interface("a.Missing"),
            Err(EngineError::UnknownInterface { .. })
        ));
    }
}
