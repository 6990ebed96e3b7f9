//! `tagen.toml` project configuration.
//!
//! Every key is optional; a missing file behaves like an empty one.
//!
//! ```toml
//! [schema]
//! path = "ta-lib/ta_func_api.xml"
//!
//! [output]
//! binding = "src/talib-binding.generated.cc"
//! declarations = "src/talib-binding.generated.d.ts"
//! build = "binding.gyp"
//! dump = "src/ta_func_api.generated.json"
//!
//! [build]
//! target = "talib_binding"
//!
//! [generate]
//! functions = ["SMA", "MACD"]
//! ```

mod file;

use std::{path::PathBuf, str::FromStr};

pub use file::TagenToml;
use serde::Deserialize;
use tagen_core::is_c_identifier;

use crate::{Error, Result, error::SourceContext};

/// Root of `tagen.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where the function schema lives.
    pub schema: SchemaConfig,
    /// Where the artifacts are written.
    pub output: OutputConfig,
    /// Native build settings.
    pub build: BuildConfig,
    /// Function selection.
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaConfig {
    pub path: PathBuf,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("ta-lib/ta_func_api.xml"),
        }
    }
}

/// Artifact paths, relative to the project root.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub binding: PathBuf,
    pub declarations: PathBuf,
    pub build: PathBuf,
    /// Optional JSON dump of the normalized schema.
    pub dump: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            binding: PathBuf::from("src/talib-binding.generated.cc"),
            declarations: PathBuf::from("src/talib-binding.generated.d.ts"),
            build: PathBuf::from("binding.gyp"),
            dump: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Addon target name, used by `binding.gyp` and `NODE_MODULE`.
    pub target: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            target: "talib_binding".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Abbreviations to emit. Empty means every function.
    pub functions: Vec<String>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "tagen.toml")
    }
}

/// Parse a config from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source_ctx.config_error(e))?;
    config.validate(&source_ctx)?;
    Ok(config)
}

impl Config {
    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if !is_c_identifier(&self.build.target) {
            return Err(ctx.validation_error(
                format!(
                    "build.target '{}' must be a C identifier (letters, digits, underscores)",
                    self.build.target
                ),
                &self.build.target,
            ));
        }

        if let Some(empty) = self.generate.functions.iter().find(|f| f.trim().is_empty()) {
            return Err(ctx.validation_error(
                "generate.functions must not contain empty names",
                empty,
            ));
        }

        Ok(())
    }
}
