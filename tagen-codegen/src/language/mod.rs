//! Artifact generator abstractions.
//!
//! - [`ArtifactCodegen`] - Main trait for artifact generators
//! - [`TypeMapper`] - Trait for mapping argument kinds to target types
//! - [`GenerateResult`] - Result of writing one artifact
//! - [`PreviewFile`] - Rendered artifact preview

mod traits;

pub use traits::{ArtifactCodegen, GenerateResult, PreviewFile, TypeMapper};
