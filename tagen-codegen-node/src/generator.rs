use std::path::{Path, PathBuf};

use eyre::Result;
use tagen_codegen::{
    language::{ArtifactCodegen, GenerateResult, PreviewFile},
    resolve::{FunctionSignature, resolve_all},
};
use tagen_core::GeneratedFile;
use tagen_ir::ApiIR;

use crate::{
    BuildSources, NAN_INCLUDE,
    files::{BindingCc, BindingGyp, Target},
};

/// Default target name of the native module.
pub const DEFAULT_TARGET: &str = "talib_binding";

/// Native binding generator producing the nan binding source
pub struct Generator<'a> {
    api: &'a ApiIR,
    path: PathBuf,
    target: String,
}

impl<'a> Generator<'a> {
    /// Default output path, relative to the project root.
    pub const DEFAULT_PATH: &'static str = "src/talib-binding.generated.cc";

    pub fn new(api: &'a ApiIR) -> Self {
        Self {
            api,
            path: PathBuf::from(Self::DEFAULT_PATH),
            target: DEFAULT_TARGET.to_string(),
        }
    }

    /// Set the output path, relative to the project root.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the module target name used by `NODE_MODULE`.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    fn resolve(&self) -> Result<Vec<FunctionSignature>> {
        tracing::debug!(functions = self.api.len(), "resolving binding signatures");
        Ok(resolve_all(self.api)?)
    }
}

impl ArtifactCodegen for Generator<'_> {
    fn artifact(&self) -> &'static str {
        "binding"
    }

    fn preview(&self) -> Result<PreviewFile> {
        let functions = self.resolve()?;
        let file = BindingCc::new(&self.path, &self.target, &functions);
        Ok(PreviewFile {
            path: self.path.display().to_string(),
            content: file.render(),
        })
    }

    fn generate(&self, root: &Path) -> Result<GenerateResult> {
        let functions = self.resolve()?;
        let file = BindingCc::new(&self.path, &self.target, &functions);
        let write = file.write(root)?;
        Ok(GenerateResult {
            artifact: self.artifact(),
            path: file.path(root),
            write,
        })
    }
}

/// Build descriptor generator producing `binding.gyp`
pub struct BuildGenerator<'a> {
    root: &'a Path,
    path: PathBuf,
    target: String,
    binding: PathBuf,
}

impl<'a> BuildGenerator<'a> {
    /// Default output path, relative to the project root.
    pub const DEFAULT_PATH: &'static str = "binding.gyp";

    /// Create a generator scanning `root` for native sources.
    pub fn new(root: &'a Path) -> Self {
        Self {
            root,
            path: PathBuf::from(Self::DEFAULT_PATH),
            target: DEFAULT_TARGET.to_string(),
            binding: PathBuf::from(Generator::DEFAULT_PATH),
        }
    }

    /// Set the output path, relative to the project root.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the target name.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Set the path of the generated binding source, listed last.
    pub fn binding(mut self, binding: impl Into<PathBuf>) -> Self {
        self.binding = binding.into();
        self
    }

    /// Scan the root and assemble the build target.
    pub fn build_target(&self) -> Result<Target> {
        let found = BuildSources::scan(self.root)?;

        let mut sources = found.sources;
        sources.push(self.binding.to_string_lossy().replace('\\', "/"));

        let mut include_dirs = found.include_dirs;
        include_dirs.push(NAN_INCLUDE.to_string());

        Ok(Target {
            name: self.target.clone(),
            sources,
            include_dirs,
        })
    }
}

impl ArtifactCodegen for BuildGenerator<'_> {
    fn artifact(&self) -> &'static str {
        "build"
    }

    fn preview(&self) -> Result<PreviewFile> {
        let target = self.build_target()?;
        Ok(PreviewFile {
            path: self.path.display().to_string(),
            content: BindingGyp::new(&self.path, &target).render(),
        })
    }

    fn generate(&self, root: &Path) -> Result<GenerateResult> {
        let target = self.build_target()?;
        let file = BindingGyp::new(&self.path, &target);
        let write = file.write(root)?;
        Ok(GenerateResult {
            artifact: self.artifact(),
            path: file.path(root),
            write,
        })
    }
}
