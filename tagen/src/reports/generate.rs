//! Generate command report data structures.

use std::path::PathBuf;

use tagen_codegen::language::{GenerateResult, PreviewFile};
use tagen_core::WriteResult;

use super::output::{Output, Report};

/// Report data from artifact generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of functions emitted.
    pub function_count: usize,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// Written files or previews.
    pub result: GenerationResult,
}

/// Result of artifact generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Artifacts were written to disk, in write order.
    Written {
        files: Vec<GenerateResult>,
        /// Path of the schema dump, if one was configured.
        dump: Option<PathBuf>,
    },
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written { files, dump } => {
                out.section(&format!("Generated {} functions", self.function_count));
                for file in files {
                    let path = file.path.display();
                    match file.write {
                        WriteResult::Written { bytes } => out.added_item(&format!(
                            "{} ({}, {} bytes)",
                            path, file.artifact, bytes
                        )),
                        WriteResult::Unchanged => {
                            out.list_item(&format!("{} ({}, unchanged)", path, file.artifact))
                        }
                    }
                }
                if let Some(dump) = dump {
                    out.newline();
                    out.key_value("Schema dump written to", &dump.display().to_string());
                }
            }
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} files would be generated for {} functions",
                    files.len(),
                    self.function_count
                ));
            }
        }
    }
}
