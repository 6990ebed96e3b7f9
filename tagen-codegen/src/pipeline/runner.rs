//! Pipeline orchestrator.

use eyre::Result;
use tagen_ir::ApiIR;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{ResolvePhase, SelectPhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, select, resolve) followed by any user
/// phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new()
///     .select(["SMA"])
///     .plugin(SnapshotPlugin::new("model.json"))
///     .run(schema)?;
/// ```
pub struct Pipeline {
    selection: Vec<String>,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with default built-in phases.
    pub fn new() -> Self {
        Self {
            selection: Vec::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Restrict generation to the given abbreviations.
    pub fn select<I, S>(mut self, functions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection.extend(functions.into_iter().map(Into::into));
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a parsed schema.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - runs lints, fails on any error diagnostic
    /// 2. SelectPhase - narrows the schema to the selection
    /// 3. ResolvePhase - fails on any unresolvable signature
    /// 4. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. Diagnostics recorded
    /// before the failure are lost with the context, so callers that need
    /// them should use [`Pipeline::run_with`].
    pub fn run(&self, schema: ApiIR) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(schema, self.selection.clone());
        self.run_with(&mut ctx)?;
        Ok(ctx)
    }

    /// Run the pipeline on an existing context.
    pub fn run_with(&self, ctx: &mut CompilationContext) -> Result<()> {
        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(ValidatePhase::new()),
            Box::new(SelectPhase),
            Box::new(ResolvePhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), ctx)?;
        }

        Ok(())
    }

    /// Get a fresh context for [`Pipeline::run_with`].
    pub fn context(&self, schema: ApiIR) -> CompilationContext {
        CompilationContext::new(schema, self.selection.clone())
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        tracing::debug!(phase = phase_name, "running phase");
        phase.run(ctx)?;
        tracing::debug!(
            phase = phase_name,
            diagnostics = ctx.diagnostics.len(),
            "phase complete"
        );

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
