use std::path::PathBuf;

use clap::Args;
use tagen_ir::ApiIR;
use tagen_schema::{Config, TagenToml, schema_from_file};

use super::UnwrapOrExit;

/// Arguments locating the project, its config and its schema.
#[derive(Args)]
pub struct ProjectArgs {
    /// Project root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Path to tagen.toml, relative to the root
    #[arg(short, long, default_value = "tagen.toml")]
    pub config: PathBuf,

    /// Path to ta_func_api.xml, relative to the root (overrides tagen.toml)
    #[arg(short, long)]
    pub schema: Option<PathBuf>,
}

/// A loaded project.
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
    pub schema_path: PathBuf,
    pub api: ApiIR,
}

impl ProjectArgs {
    /// Load the config and parse the schema, exiting on failure.
    pub fn load(&self) -> Project {
        let toml = TagenToml::open_or_default(self.root.join(&self.config)).unwrap_or_exit();
        let config = toml.config().clone();

        let schema = self.schema.as_ref().unwrap_or(&config.schema.path);
        let schema_path = self.root.join(schema);
        tracing::debug!(schema = %schema_path.display(), "parsing schema");
        let api = schema_from_file(&schema_path).unwrap_or_exit();
        tracing::info!(functions = api.len(), "parsed schema");

        Project {
            root: self.root.clone(),
            config,
            schema_path,
            api,
        }
    }
}
