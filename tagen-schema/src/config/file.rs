use std::path::{Path, PathBuf};

use super::{Config, parse_config};
use crate::Result;

/// Represents a tagen.toml file with both raw content and parsed config.
pub struct TagenToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl TagenToml {
    /// Open and parse a tagen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = parse_config(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Open the file if it exists, otherwise fall back to the default config.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self {
                path: path.to_path_buf(),
                content: String::new(),
                config: Config::default(),
            })
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content (empty when the file does not exist).
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let toml = TagenToml::open_or_default(temp.path().join("tagen.toml")).unwrap();

        assert!(toml.content().is_empty());
        assert_eq!(toml.config().build.target, "talib_binding");
    }

    #[test]
    fn test_open_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tagen.toml");
        std::fs::write(&path, "[build]\ntarget = \"addon\"\n").unwrap();

        let toml = TagenToml::open_or_default(&path).unwrap();

        assert_eq!(toml.path(), path.as_path());
        assert_eq!(toml.config().build.target, "addon");
    }

    #[test]
    fn test_open_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        assert!(TagenToml::open(temp.path().join("missing.toml")).is_err());
    }
}
