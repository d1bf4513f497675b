// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::model::{IdRange, MessageInterface};
use crate::traits::{Validator, ValidatorScope};
use crate::validation::{Diagnostic, Subject, ValidationContext};

/// Valid id ranges are well formed, contain the interface's explicit ids and
/// do not overlap ranges of other interfaces with the same project code.
pub struct IdRangeValidator;

impl Validator for IdRangeValidator {
    fn name(&self) -> &'static str {
        "id_range"
    }

    fn scope(&self) -> ValidatorScope {
        ValidatorScope::Batch
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut claimed: Vec<(&MessageInterface, IdRange)> = Vec::new();

        for resolved in ctx.interfaces {
            let interface = &resolved.interface;
            let mut well_formed = Vec::new();

            for range in &interface.valid_id_ranges {
                if range.min > range.max {
                    diagnostics.push(Diagnostic::error(
                        Subject::of_interface(interface),
                        format!(
                            "Minimum id {} is greater than the maximum id {} of the valid id range.",
                            range.min, range.max
                        ),
                    ));
                    continue;
                }
                if !interface.project_code.is_empty() {
                    for (other, existing) in claimed.iter().filter(|(other, _)| {
                        other.name != interface.name && other.project_code == interface.project_code
                    }) {
                        if existing.overlaps(range) {
                            diagnostics.push(Diagnostic::error(
                                Subject::of_interface(interface),
                                format!(
                                    "Valid id range {} overlaps the range {} of {} for project code '{}'.",
                                    range, existing, other.name, interface.project_code
                                ),
                            ));
                        }
                    }
                }
                well_formed.push(*range);
            }

            if !interface.valid_id_ranges.is_empty() {
                for method in interface.declared_methods() {
                    let Some(id) = method.message.as_ref().and_then(|m| m.id.explicit()) else {
                        continue;
                    };
                    if !well_formed.iter().any(|r| r.contains(id)) {
                        let ranges: Vec<String> = interface.valid_id_ranges.iter().map(IdRange::to_string).collect();
                        diagnostics.push(Diagnostic::error(
                            Subject::of_method(interface, method),
                            format!("Message id {} is outside the valid id ranges [{}].", id, ranges.join(", ")),
                        ));
                    }
                }
            }

            claimed.extend(well_formed.into_iter().map(|r| (interface, r)));
        }
        diagnostics
    }
}
