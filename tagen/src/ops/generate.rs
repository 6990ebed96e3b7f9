//! Generate operation - artifacts from the function schema.

use std::path::Path;

use eyre::{Context, Result};
use tagen_codegen::{
    language::ArtifactCodegen,
    pipeline::{Pipeline, SnapshotPlugin},
};
use tagen_codegen_node::{BuildGenerator, Generator as BindingGenerator};
use tagen_codegen_typescript::Generator as DeclarationGenerator;
use tagen_core::WriteResult;
use tagen_ir::ApiIR;
use tagen_schema::Config;

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Project root; artifact paths are relative to it.
    pub root: &'a Path,
    /// Project configuration.
    pub config: &'a Config,
    /// Abbreviations to generate. Empty means every function.
    pub selection: &'a [String],
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Validates and narrows the schema and resolves every signature through the
/// pipeline, then renders the binding source, the declarations and the build
/// descriptor in that order. Nothing is written, the dump included, when
/// validation or resolution fails.
pub fn generate(api: ApiIR, opts: GenerateOptions) -> Result<GenerateReport> {
    let output = &opts.config.output;
    let target = opts.config.build.target.as_str();

    let dump = output
        .dump
        .as_ref()
        .filter(|_| !opts.dry_run)
        .map(|path| opts.root.join(path));

    let mut pipeline = Pipeline::new().select(opts.selection.iter().cloned());
    if let Some(path) = &dump {
        pipeline = pipeline.plugin(SnapshotPlugin::new(path));
    }
    let mut ctx = pipeline.run(api).wrap_err("Pipeline failed")?;

    let warnings = ctx
        .warnings()
        .map(|d| match &d.location {
            Some(loc) => format!("{}\n  --> {}", d.message, loc),
            None => d.message.clone(),
        })
        .collect();
    let api = ctx.take_ir()?;

    let binding = BindingGenerator::new(&api)
        .path(output.binding.clone())
        .target(target);
    let declarations = DeclarationGenerator::new(&api).path(output.declarations.clone());
    let build = BuildGenerator::new(opts.root)
        .path(output.build.clone())
        .target(target)
        .binding(output.binding.clone());
    let generators: [&dyn ArtifactCodegen; 3] = [&binding, &declarations, &build];

    let result = if opts.dry_run {
        let files = generators
            .iter()
            .map(|g| g.preview())
            .collect::<Result<Vec<_>>>()?;
        GenerationResult::Preview(files)
    } else {
        let mut files = Vec::with_capacity(generators.len());
        for generator in generators {
            let written = generator.generate(opts.root).wrap_err_with(|| {
                format!("Failed to write the {} artifact", generator.artifact())
            })?;
            match written.write {
                WriteResult::Written { bytes } => tracing::info!(
                    artifact = written.artifact,
                    path = %written.path.display(),
                    bytes,
                    "wrote artifact"
                ),
                WriteResult::Unchanged => tracing::info!(
                    artifact = written.artifact,
                    path = %written.path.display(),
                    "artifact unchanged"
                ),
            }
            files.push(written);
        }
        GenerationResult::Written { files, dump }
    };

    Ok(GenerateReport {
        function_count: api.len(),
        warnings,
        result,
    })
}
