//! Compilation pipeline for code generation.
//!
//! This module provides a [`Pipeline`] orchestrator that takes the parsed
//! schema model to the set of functions the generators emit. The pipeline
//! provides:
//!
//! - Explicit phase boundaries (validate → select → resolve)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//!
//! # Example
//!
//! ```ignore
//! use tagen_codegen::pipeline::Pipeline;
//!
//! let mut ctx = Pipeline::new().select(["SMA", "MACD"]).run(schema)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//!
//! let generator = Generator::new(ctx.take_ir()?);
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Location, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::SnapshotPlugin;
