use std::path::{Path, PathBuf};

use eyre::Result;

/// Notice placed at the top of every generated artifact that supports comments.
pub const GENERATED_NOTICE: &str = "Generated by tagen from ta_func_api.xml. Do not edit.";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Render the file in memory, then write it to disk in one step
    fn write(&self, base: &Path) -> Result<WriteResult> {
        File::new(self.path(base), self.render()).write()
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written { bytes: usize },
    /// File content was already up to date
    Unchanged,
}

/// A file to be generated
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, skipping the write when the content is identical
    pub fn write(&self) -> Result<WriteResult> {
        if self.exists() && std::fs::read_to_string(&self.path)? == self.content {
            return Ok(WriteResult::Unchanged);
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written {
            bytes: self.content.len(),
        })
    }
}
