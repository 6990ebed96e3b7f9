//! Validate phase - runs lints on the schema.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{
    AbbreviationIdentifierLint, DuplicateAbbreviationLint, EmptyDescriptionLint, SingletonFieldLint,
};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the schema using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(SingletonFieldLint),
                Box::new(DuplicateAbbreviationLint),
                Box::new(AbbreviationIdentifierLint),
                Box::new(EmptyDescriptionLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check schema integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.schema, &mut ctx.diagnostics);
        }

        // Warnings are allowed
        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tagen_ir::ApiIR;

    use super::*;
    use crate::{pipeline::Diagnostic, testing};

    #[test]
    fn test_default_lints() {
        let names: Vec<_> = ValidatePhase::new()
            .lint_info()
            .into_iter()
            .map(|info| info.name)
            .collect();

        assert_eq!(
            names,
            [
                "singleton-field",
                "duplicate-abbreviation",
                "abbreviation-identifier",
                "empty-description"
            ]
        );
    }

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _schema: &ApiIR, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("test", "forced error"));
            }
        }

        let mut ctx = CompilationContext::new(testing::all(), vec![]);

        let phase = ValidatePhase::empty().with_lint(AlwaysErrorLint);
        let result = phase.run(&mut ctx);

        assert!(result.is_err());
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_fixtures_are_valid() {
        let mut ctx = CompilationContext::new(testing::all(), vec![]);

        ValidatePhase::new().run(&mut ctx).unwrap();

        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_warnings_allowed() {
        let mut sma = testing::sma();
        sma.description.clear();
        let mut ctx = CompilationContext::new(testing::api([sma]), vec![]);

        let result = ValidatePhase::new().run(&mut ctx);

        assert!(result.is_ok());
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }
}
