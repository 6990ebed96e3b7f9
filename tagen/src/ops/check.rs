//! Check operation - schema validation and signature resolution.

use std::path::Path;

use eyre::Result;
use tagen_codegen::pipeline::{Diagnostic, Pipeline};
use tagen_ir::ApiIR;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline, whose resolve phase checks every selected signature
/// the way the generators would. Every problem is collected instead of
/// stopping at the first one.
pub fn check(api: ApiIR, schema_path: &Path, selection: &[String]) -> Result<CheckReport> {
    let pipeline = Pipeline::new().select(selection.iter().cloned());
    let mut ctx = pipeline.context(api);
    let outcome = pipeline.run_with(&mut ctx);

    let errors: Vec<String> = ctx.errors().map(describe).collect();
    let warnings = ctx.warnings().map(describe).collect();
    let function_count = ctx.ir.as_ref().map_or(0, |ir| ir.len());

    match outcome {
        Ok(()) => {}
        // A phase that failed without reporting anything is an internal error
        Err(e) if errors.is_empty() => return Err(e),
        Err(e) => tracing::debug!(error = %e, "pipeline stopped"),
    }

    Ok(CheckReport {
        schema_path: schema_path.to_path_buf(),
        function_count,
        errors,
        warnings,
    })
}

fn describe(diagnostic: &Diagnostic) -> String {
    match &diagnostic.location {
        Some(loc) => format!("{}\n  --> {}", diagnostic.message, loc),
        None => diagnostic.message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use tagen_codegen::testing;
    use tagen_ir::Argument;

    use super::*;

    fn schema_path() -> &'static Path {
        Path::new("ta_func_api.xml")
    }

    #[test]
    fn test_valid_schema() {
        let report = check(testing::all(), schema_path(), &[]).unwrap();

        assert!(report.is_valid());
        assert_eq!(report.function_count, 6);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_every_singleton_violation_is_reported() {
        let mut sma = testing::sma();
        sma.required[0].arg = Argument {
            names: vec!["inReal".to_string(), "inOther".to_string()],
            types: vec!["Double Array".to_string()],
        };
        let mut sar = testing::sar();
        sar.outputs[0].arg.types.clear();

        let report = check(testing::api([sma, sar]), schema_path(), &[]).unwrap();

        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.function_count, 0);
    }

    #[test]
    fn test_resolution_errors_are_collected() {
        let mut sma = testing::sma();
        sma.optional[0].default_value = "abc".to_string();
        let mut macd = testing::macd();
        macd.outputs[0].arg.types = vec!["Float Array".to_string()];

        let report = check(testing::api([sma, macd, testing::sar()]), schema_path(), &[]).unwrap();

        assert_eq!(report.function_count, 3);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].starts_with("SMA:"));
        assert!(report.errors[1].contains("Float Array"));
    }

    #[test]
    fn test_unknown_selection_is_an_error() {
        let selection = vec!["SMA".to_string(), "NOPE".to_string()];

        let report = check(testing::all(), schema_path(), &selection).unwrap();

        assert!(!report.is_valid());
        assert!(report.errors[0].contains("NOPE"));
    }
}
