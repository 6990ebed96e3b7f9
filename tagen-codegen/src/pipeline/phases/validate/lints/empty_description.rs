//! Lint for empty function descriptions.

use tagen_ir::ApiIR;

use super::super::Lint;
use crate::pipeline::{Diagnostic, Location};

/// Lint that warns about functions missing a short description.
///
/// The description is the first line of the generated documentation.
pub struct EmptyDescriptionLint;

impl Lint for EmptyDescriptionLint {
    fn name(&self) -> &'static str {
        "empty-description"
    }

    fn description(&self) -> &'static str {
        "Warn about functions without a short description"
    }

    fn check(&self, schema: &ApiIR, diagnostics: &mut Vec<Diagnostic>) {
        for function in &schema.functions {
            if function.description.trim().is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("function '{}' has no description", function.abbreviation),
                    )
                    .at(Location::function(&function.abbreviation)),
                );
            }
        }
    }
}
