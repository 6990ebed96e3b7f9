//! Select phase - narrows the schema to the requested functions.

use std::collections::HashSet;

use eyre::{Result, bail};
use tagen_ir::ApiIR;

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// Phase that populates [`CompilationContext::ir`] with the selected functions.
///
/// An empty selection keeps every function. Selected functions keep schema
/// order regardless of the order they were requested in. Requesting an
/// abbreviation the schema does not define is an error.
pub struct SelectPhase;

impl Phase for SelectPhase {
    fn name(&self) -> &'static str {
        "select"
    }

    fn description(&self) -> &'static str {
        "Narrow the schema to the requested functions"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        if ctx.selection.is_empty() {
            ctx.ir = Some(ctx.schema.clone());
            return Ok(());
        }

        let mut unknown = Vec::new();
        for name in &ctx.selection {
            if ctx.schema.function(name).is_none() && !unknown.contains(name) {
                unknown.push(name.clone());
            }
        }
        for name in unknown {
            tracing::warn!(function = %name, "selected function is not in the schema");
            ctx.add_diagnostic(Diagnostic::error(
                self.name(),
                format!("unknown function '{}'", name),
            ));
        }
        if ctx.has_errors() {
            bail!("Selection failed with {} error(s)", ctx.error_count());
        }

        let wanted: HashSet<&str> = ctx.selection.iter().map(String::as_str).collect();
        let functions = ctx
            .schema
            .functions
            .iter()
            .filter(|f| wanted.contains(f.abbreviation.as_str()))
            .cloned()
            .collect();

        ctx.ir = Some(ApiIR { functions });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    fn abbreviations(ir: &ApiIR) -> Vec<&str> {
        ir.functions.iter().map(|f| f.abbreviation.as_str()).collect()
    }

    #[test]
    fn test_empty_selection_keeps_everything() {
        let mut ctx = CompilationContext::new(testing::all(), vec![]);

        SelectPhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.take_ir().unwrap().len(), testing::all().len());
    }

    #[test]
    fn test_selection_keeps_schema_order() {
        let selection = vec!["SAR".to_string(), "SMA".to_string(), "SAR".to_string()];
        let mut ctx = CompilationContext::new(testing::all(), selection);

        SelectPhase.run(&mut ctx).unwrap();

        let ir = ctx.take_ir().unwrap();
        assert_eq!(abbreviations(&ir), ["SMA", "SAR"]);
    }

    #[test]
    fn test_unknown_function_is_an_error() {
        let selection = vec!["SMA".to_string(), "NOPE".to_string(), "NOPE".to_string()];
        let mut ctx = CompilationContext::new(testing::all(), selection);

        let result = SelectPhase.run(&mut ctx);

        assert!(result.is_err());
        assert!(ctx.ir.is_none());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.diagnostics[0].message, "unknown function 'NOPE'");
    }
}
