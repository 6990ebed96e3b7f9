use clap::{Args, ValueEnum};
use eyre::Result;
use tagen_codegen::schema::DisplayStyle;

use super::project::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// How much of each function to show
    #[arg(long, value_enum, default_value_t = ListStyle::Descriptions)]
    pub style: ListStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListStyle {
    /// Abbreviations only
    Names,
    /// Abbreviations with descriptions
    Descriptions,
    /// Abbreviations with their argument layout
    Signatures,
}

impl From<ListStyle> for DisplayStyle {
    fn from(style: ListStyle) -> Self {
        match style {
            ListStyle::Names => DisplayStyle::Simple,
            ListStyle::Descriptions => DisplayStyle::WithDescriptions,
            ListStyle::Signatures => DisplayStyle::WithSignature,
        }
    }
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let project = self.project.load();
        let report = ops::list(&project.api, self.style.into());
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
