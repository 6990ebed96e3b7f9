//! Lint for abbreviations that cannot be used as native symbols.

use tagen_core::is_c_identifier;
use tagen_ir::ApiIR;

use super::super::Lint;
use crate::pipeline::{Diagnostic, Location};

/// Lint that rejects abbreviations which are not C identifiers.
///
/// The abbreviation is spliced into `TA_FUNC_<ABBR>`, `TA_<ABBR>_Lookback`
/// and the exported function name.
pub struct AbbreviationIdentifierLint;

impl Lint for AbbreviationIdentifierLint {
    fn name(&self) -> &'static str {
        "abbreviation-identifier"
    }

    fn description(&self) -> &'static str {
        "Ensure every abbreviation is a valid C identifier"
    }

    fn check(&self, schema: &ApiIR, diagnostics: &mut Vec<Diagnostic>) {
        for function in &schema.functions {
            let name = function.abbreviation.as_str();
            if !is_c_identifier(name) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("abbreviation '{}' is not a valid C identifier", name),
                    )
                    .at(Location::function(name)),
                );
            }
        }
    }
}
