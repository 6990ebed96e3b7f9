//! Resolve phase - checks that every selected function can be emitted.

use eyre::{Result, bail};

use crate::{
    pipeline::{CompilationContext, Diagnostic, Location, Phase},
    resolve::FunctionSignature,
};

/// Phase that resolves the signature of every selected function.
///
/// Each failure is recorded as an error diagnostic before the phase fails,
/// so one run reports every unrecognized type and bad default.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve names, kinds and defaults of the selected functions"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let Some(ir) = &ctx.ir else {
            bail!("IR not set - did SelectPhase run?");
        };

        let failures: Vec<Diagnostic> = ir
            .functions
            .iter()
            .filter_map(|spec| {
                FunctionSignature::resolve(spec).err().map(|e| {
                    Diagnostic::error(self.name(), e.to_string())
                        .at(Location::function(&spec.abbreviation))
                })
            })
            .collect();
        ctx.diagnostics.extend(failures);

        if ctx.has_errors() {
            bail!("Resolution failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    fn selected(ir: tagen_ir::ApiIR) -> CompilationContext {
        let mut ctx = CompilationContext::new(ir.clone(), vec![]);
        ctx.ir = Some(ir);
        ctx
    }

    #[test]
    fn test_fixtures_resolve() {
        let mut ctx = selected(testing::all());

        ResolvePhase.run(&mut ctx).unwrap();

        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_every_failure_is_reported() {
        let mut sma = testing::sma();
        sma.optional[0].default_value = "abc".to_string();
        let mut macd = testing::macd();
        macd.outputs[0].arg.types = vec!["Float Array".to_string()];
        let mut ctx = selected(testing::api([sma, testing::sar(), macd]));

        let result = ResolvePhase.run(&mut ctx);

        assert!(result.is_err());
        assert_eq!(ctx.error_count(), 2);
        assert!(ctx.diagnostics[0].message.starts_with("SMA:"));
        assert!(ctx.diagnostics[1].message.contains("Float Array"));
        assert_eq!(ctx.diagnostics[1].location, Some(Location::function("MACD")));
    }

    #[test]
    fn test_requires_selection() {
        let mut ctx = CompilationContext::new(testing::all(), vec![]);

        assert!(ResolvePhase.run(&mut ctx).is_err());
    }
}
