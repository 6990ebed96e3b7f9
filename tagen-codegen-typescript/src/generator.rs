//! TypeScript declaration generator.

use std::path::{Path, PathBuf};

use eyre::Result;
use tagen_codegen::{
    language::{ArtifactCodegen, GenerateResult, PreviewFile},
    resolve::{FunctionSignature, resolve_all},
};
use tagen_core::GeneratedFile;
use tagen_ir::ApiIR;

use crate::files::DeclarationTs;

/// Declaration generator producing `talib-binding.generated.d.ts`.
pub struct Generator<'a> {
    api: &'a ApiIR,
    path: PathBuf,
}

impl<'a> Generator<'a> {
    /// Default output path, relative to the project root.
    pub const DEFAULT_PATH: &'static str = "src/talib-binding.generated.d.ts";

    pub fn new(api: &'a ApiIR) -> Self {
        Self {
            api,
            path: PathBuf::from(Self::DEFAULT_PATH),
        }
    }

    /// Set the output path, relative to the project root.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    fn resolve(&self) -> Result<Vec<FunctionSignature>> {
        tracing::debug!(functions = self.api.len(), "resolving declaration signatures");
        Ok(resolve_all(self.api)?)
    }
}

impl ArtifactCodegen for Generator<'_> {
    fn artifact(&self) -> &'static str {
        "declarations"
    }

    fn preview(&self) -> Result<PreviewFile> {
        let functions = self.resolve()?;
        Ok(PreviewFile {
            path: self.path.display().to_string(),
            content: DeclarationTs::new(&self.path, &functions).render(),
        })
    }

    fn generate(&self, root: &Path) -> Result<GenerateResult> {
        let functions = self.resolve()?;
        let file = DeclarationTs::new(&self.path, &functions);
        let write = file.write(root)?;
        Ok(GenerateResult {
            artifact: self.artifact(),
            path: file.path(root),
            write,
        })
    }
}
