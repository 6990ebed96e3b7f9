use clap::Args;
use eyre::{Context, Result};

use super::project::{Project, ProjectArgs};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Only generate this function (repeatable, overrides tagen.toml)
    #[arg(short, long = "function", value_name = "ABBR")]
    pub functions: Vec<String>,

    /// Preview the artifacts without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let Project {
            root, config, api, ..
        } = self.project.load();

        let selection = if self.functions.is_empty() {
            config.generate.functions.as_slice()
        } else {
            self.functions.as_slice()
        };

        let report = ops::generate(
            api,
            GenerateOptions {
                root: &root,
                config: &config,
                selection,
                dry_run: self.dry_run,
            },
        )
        .wrap_err("Generation failed")?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
