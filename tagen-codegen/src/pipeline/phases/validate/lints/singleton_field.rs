//! Lint for argument name and type collections.

use tagen_ir::{ApiIR, Argument, Role};

use super::super::Lint;
use crate::pipeline::{Diagnostic, Location};

/// Lint that requires every argument to carry exactly one name and one type.
///
/// Every offending argument is reported, across all functions, before the
/// phase fails.
pub struct SingletonFieldLint;

impl Lint for SingletonFieldLint {
    fn name(&self) -> &'static str {
        "singleton-field"
    }

    fn description(&self) -> &'static str {
        "Require exactly one Name and one Type per argument"
    }

    fn check(&self, schema: &ApiIR, diagnostics: &mut Vec<Diagnostic>) {
        for function in &schema.functions {
            let arguments = function
                .required
                .iter()
                .map(|a| (Role::Required, &a.arg))
                .chain(function.optional.iter().map(|a| (Role::Optional, &a.arg)))
                .chain(function.outputs.iter().map(|a| (Role::Output, &a.arg)));

            let mut positions = [0usize; 3];
            for (role, arg) in arguments {
                let slot = &mut positions[role as usize];
                let index = *slot;
                *slot += 1;

                let location = Location::argument(&function.abbreviation, role, index);
                check_field(&location, role, arg, "Name", &arg.names, diagnostics);
                check_field(&location, role, arg, "Type", &arg.types, diagnostics);
            }
        }
    }
}

fn check_field(
    location: &Location,
    role: Role,
    arg: &Argument,
    field: &str,
    values: &[String],
    diagnostics: &mut Vec<Diagnostic>,
) {
    if values.len() == 1 {
        return;
    }

    diagnostics.push(
        Diagnostic::error(
            "validate",
            format!(
                "{}: {} '{}' must have exactly one {}, found {}",
                location.function,
                role,
                arg.label(),
                field,
                values.len()
            ),
        )
        .at(location.clone()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_valid_schema() {
        let mut diagnostics = Vec::new();
        SingletonFieldLint.check(&testing::all(), &mut diagnostics);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_reports_every_offender() {
        let mut macd = testing::macd();
        macd.optional[1].arg.names.push("Slower Period".to_string());
        macd.outputs[2].arg.types.clear();

        let mut sar = testing::sar();
        sar.required[1].arg.names.clear();

        let mut diagnostics = Vec::new();
        SingletonFieldLint.check(&testing::api([macd, sar]), &mut diagnostics);

        let found: Vec<_> = diagnostics
            .iter()
            .map(|d| d.location.as_ref().map(|l| l.to_string()))
            .collect();

        assert_eq!(
            found,
            [
                Some("MACD.optional[1]".to_string()),
                Some("MACD.outputs[2]".to_string()),
                Some("SAR.required[1]".to_string()),
            ]
        );
        assert!(diagnostics.iter().all(|d| d.severity.is_error()));
        assert_eq!(
            diagnostics[0].message,
            "MACD: optional input 'Slow Period|Slower Period' must have exactly one Name, found 2"
        );
        assert_eq!(
            diagnostics[2].message,
            "SAR: required input '<unnamed>' must have exactly one Name, found 0"
        );
    }
}
