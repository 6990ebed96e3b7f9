//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the schema and collects diagnostics
//! - [`SelectPhase`] - narrows the schema to the requested functions
//! - [`ResolvePhase`] - resolves every selected signature

mod resolve;
mod select;
mod validate;

pub use resolve::ResolvePhase;
pub use select::SelectPhase;
pub use validate::{
    AbbreviationIdentifierLint, DuplicateAbbreviationLint, EmptyDescriptionLint, Lint, LintInfo,
    SingletonFieldLint, ValidatePhase,
};
