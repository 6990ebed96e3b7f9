//! Artifact generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;
use tagen_core::WriteResult;

use crate::resolve::{OptionalKind, OutputKind, RequiredKind};

/// Trait for artifact generators.
///
/// Each generator produces exactly one file. Content is rendered completely
/// in memory before anything touches the disk.
pub trait ArtifactCodegen {
    /// Artifact identifier (e.g., "binding", "declarations", "build")
    fn artifact(&self) -> &'static str;

    /// Preview the generated file without writing to disk
    fn preview(&self) -> Result<PreviewFile>;

    /// Generate the file under the specified root directory
    fn generate(&self, root: &Path) -> Result<GenerateResult>;
}

/// Result of writing one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Artifact identifier
    pub artifact: &'static str,
    /// Absolute path of the written file
    pub path: PathBuf,
    /// Whether the file changed
    pub write: WriteResult,
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from the project root
    pub path: String,
    /// File content
    pub content: String,
}

/// Trait for mapping argument kinds to target type strings.
///
/// Implement this trait for each target to provide type mappings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a required input kind
    fn map_required(&self, kind: RequiredKind) -> &'static str;

    /// Map an optional input kind
    fn map_optional(&self, kind: OptionalKind) -> &'static str;

    /// Map an output kind
    fn map_output(&self, kind: OutputKind) -> &'static str;
}
