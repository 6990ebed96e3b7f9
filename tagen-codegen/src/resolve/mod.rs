//! Resolution of schema arguments into emission-ready signatures.
//!
//! - [`names`] - Canonical identifiers and per-surface spellings
//! - [`kinds`] - Classification of required inputs and outputs
//! - [`defaults`] - Classification and default value parsing of optional inputs
//! - [`signature`] - Resolved function signatures and positional offsets

mod defaults;
mod error;
mod kinds;
mod names;
mod signature;

pub use defaults::{OptionalKind, ResolvedDefault, resolve_optional};
pub use error::ResolveError;
pub use kinds::{ElementType, OutputKind, RequiredKind, resolve_output, resolve_required};
pub use names::{RESERVED_IDENTIFIERS, ResolvedName, Surface, canonical_name, resolve_name};
pub use signature::{
    Convention, FunctionSignature, OptionalParam, OutputParam, RequiredParam, resolve_all,
};
