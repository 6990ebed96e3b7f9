//! Lint for duplicate function abbreviations.

use std::collections::HashSet;

use tagen_ir::ApiIR;

use super::super::Lint;
use crate::pipeline::{Diagnostic, Location};

/// Lint that detects functions sharing an abbreviation.
///
/// The abbreviation is both the exported name and the native symbol, so a
/// duplicate would register two entry points under one name.
pub struct DuplicateAbbreviationLint;

impl Lint for DuplicateAbbreviationLint {
    fn name(&self) -> &'static str {
        "duplicate-abbreviation"
    }

    fn description(&self) -> &'static str {
        "Detect functions that share an abbreviation"
    }

    fn check(&self, schema: &ApiIR, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();

        for function in &schema.functions {
            let name = function.abbreviation.as_str();
            if !seen.insert(name) && reported.insert(name) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("abbreviation '{}' is defined more than once", name),
                    )
                    .at(Location::function(name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_duplicate_reported_once() {
        let schema = testing::api([
            testing::sma(),
            testing::macd(),
            testing::sma(),
            testing::sma(),
        ]);

        let mut diagnostics = Vec::new();
        DuplicateAbbreviationLint.check(&schema, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert!(diagnostics[0].message.contains("'SMA'"));
    }

    #[test]
    fn test_unique_abbreviations() {
        let mut diagnostics = Vec::new();
        DuplicateAbbreviationLint.check(&testing::all(), &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
