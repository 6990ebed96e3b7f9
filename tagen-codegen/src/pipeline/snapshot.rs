//! Pipeline snapshot plugin for debugging.
//!
//! Writes the normalized schema model as JSON once every selected signature
//! has resolved, so a run that fails leaves no dump behind.
//! The dump mirrors exactly what the generators consume and is never read
//! back by the pipeline.

use std::path::{Path, PathBuf};

use eyre::Result;
use serde::Serialize;
use tagen_core::{File, WriteResult};
use tagen_ir::ApiIR;

use super::{CompilationContext, Diagnostic, Plugin};

/// The dumped document.
#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    /// The phase the snapshot was taken after.
    phase: &'a str,
    /// Every function of the schema.
    schema: &'a ApiIR,
    /// Warnings collected so far.
    diagnostics: &'a [Diagnostic],
}

/// A plugin that dumps the schema model to a JSON file.
pub struct SnapshotPlugin {
    path: PathBuf,
}

impl SnapshotPlugin {
    /// Phase after which the snapshot is taken.
    pub const PHASE: &'static str = "resolve";

    /// Create a snapshot plugin writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Output path of the dump.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render the snapshot document.
    pub fn render(&self, ctx: &CompilationContext) -> Result<String> {
        let snapshot = Snapshot {
            phase: Self::PHASE,
            schema: &ctx.schema,
            diagnostics: &ctx.diagnostics,
        };
        let mut json = serde_json::to_string_pretty(&snapshot)?;
        json.push('\n');
        Ok(json)
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        if phase != Self::PHASE {
            return Ok(());
        }

        let content = self.render(ctx)?;
        let result = File::new(&self.path, content).write()?;
        if let WriteResult::Written { bytes } = result {
            tracing::info!(path = %self.path.display(), bytes, "wrote schema snapshot");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::{pipeline::Pipeline, testing};

    #[test]
    fn test_snapshot_written_after_resolve() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("debug").join("model.json");

        Pipeline::new()
            .select(["SMA"])
            .plugin(SnapshotPlugin::new(&path))
            .run(testing::all())
            .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(json["phase"], "resolve");
        // The dump covers the whole schema, not only the selection.
        assert_eq!(
            json["schema"]["functions"].as_array().unwrap().len(),
            testing::all().len()
        );
        assert_eq!(json["schema"]["functions"][0]["abbreviation"], "SMA");
        assert_eq!(json["schema"]["functions"][0]["required"][0]["names"][0], "inReal");
    }

    #[test]
    fn test_snapshot_skipped_when_validation_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("model.json");
        let mut sma = testing::sma();
        sma.outputs[0].arg.names.clear();

        let result = Pipeline::new()
            .plugin(SnapshotPlugin::new(&path))
            .run(testing::api([sma]));

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_snapshot_skipped_when_resolution_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("model.json");
        let mut sma = testing::sma();
        sma.optional[0].default_value = "abc".to_string();

        let result = Pipeline::new()
            .plugin(SnapshotPlugin::new(&path))
            .run(testing::api([sma]));

        assert!(result.is_err());
        assert!(!path.exists());
    }
}
