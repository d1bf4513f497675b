// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Validation of resolved message interfaces.
//!
//! The `ValidationEngine` runs a fixed, ordered list of [`Validator`]s. Each
//! runs to completion and its diagnostics are appended in pipeline order, so
//! a batch always reports every problem it has.
//!
//! Interface-scoped validators only look at the interfaces in the context
//! they are handed, which lets the session run them per interface on
//! concurrent workers. Batch-scoped validators compare interfaces with each
//! other and run once over everything.

pub mod diagnostic;
pub mod validators;

pub use diagnostic::{Diagnostic, Severity, Subject};

use crate::config::EngineOptions;
use crate::engine::descriptor::Resolution;
use crate::model::{MessageInterface, MessageMethod, TypeCatalog};
use crate::observability::messages::validation::ValidatorCompleted;
use crate::observability::messages::StructuredLog;
use crate::traits::{Validator, ValidatorScope};

/// An interface model together with the resolutions of its methods.
///
/// `resolutions[i]` belongs to `interface.methods[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInterface {
    pub interface: MessageInterface,
    pub resolutions: Vec<Resolution>,
}

impl ResolvedInterface {
    pub fn methods(&self) -> impl Iterator<Item = (&MessageMethod, &Resolution)> {
        self.interface.methods.iter().zip(self.resolutions.iter())
    }
}

/// Read-only inputs shared by all validators.
pub struct ValidationContext<'a> {
    pub interfaces: &'a [ResolvedInterface],
    pub catalog: &'a TypeCatalog,
    pub options: &'a EngineOptions,
}

pub struct ValidationEngine {
    validators: Vec<Box<dyn Validator>>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine {
    /// The standard pipeline.
    pub fn new() -> Self {
        Self::with_validators(validators::standard())
    }

    pub fn with_validators(validators: Vec<Box<dyn Validator>>) -> Self {
        Self { validators }
    }

    pub fn validators(&self) -> impl Iterator<Item = &(dyn Validator + 'static)> {
        self.validators.iter().map(|v| v.as_ref())
    }

    /// Every validator, in pipeline order.
    pub fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        self.run(ctx, |_| true)
    }

    /// Validators that look at one interface at a time.
    pub fn validate_interfaces(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        self.run(ctx, |scope| scope == ValidatorScope::Interface)
    }

    /// Validators that compare interfaces across the batch.
    pub fn validate_batch(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        self.run(ctx, |scope| scope == ValidatorScope::Batch)
    }

    fn run(&self, ctx: &ValidationContext<'_>, include: impl Fn(ValidatorScope) -> bool) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for validator in self.validators.iter().filter(|v| include(v.scope())) {
            let found = validator.validate(ctx);
            ValidatorCompleted {
                validator: validator.name(),
                diagnostic_count: found.len(),
            }
            .log();
            diagnostics.extend(found);
        }
        diagnostics
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::config::{Config, InterfaceHierarchy};
    use crate::engine::builder::build_interface;
    use crate::engine::resolver::MethodDescriptorResolver;

    pub struct Batch {
        pub config: Config,
        pub catalog: TypeCatalog,
        pub interfaces: Vec<ResolvedInterface>,
    }

    impl Batch {
        pub fn context(&self) -> ValidationContext<'_> {
            ValidationContext {
                interfaces: &self.interfaces,
                catalog: &self.catalog,
                options: &self.config.engine,
            }
        }
    }

    /// Builds and resolves every non-base interface of a YAML batch.
    pub fn resolve_batch(yaml: &str) -> Batch {
        let config: Config = serde_yaml::from_str(yaml).expect("test batch should parse");
        let hierarchy = InterfaceHierarchy::build(&config);
        let catalog = TypeCatalog::build(&config.types, &config.engine.type_roots);
        let resolver = MethodDescriptorResolver::new(&hierarchy);
        let interfaces = config
            .interfaces
            .iter()
            .filter(|i| !config.engine.is_logger_base(&i.name))
            .map(|i| {
                let interface = build_interface(&config, &hierarchy, &catalog, &i.name)
                    .expect("interface should build");
                let resolutions = resolver.resolve(&interface);
                ResolvedInterface {
                    interface,
                    resolutions,
                }
            })
            .collect();
        Batch {
            config,
            catalog,
            interfaces,
        }
    }

    pub fn run(validator: &dyn Validator, yaml: &str) -> Vec<Diagnostic> {
        let batch = resolve_batch(yaml);
        validator.validate(&batch.context())
    }

    pub fn errors(diagnostics: &[Diagnostic]) -> Vec<&Diagnostic> {
        diagnostics.iter().filter(|d| d.is_error()).collect()
    }

    pub fn warnings(diagnostics: &[Diagnostic]) -> Vec<&Diagnostic> {
        diagnostics.iter().filter(|d| !d.is_error()).collect()
    }
}
