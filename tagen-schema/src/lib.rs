//! Schema and configuration parsing for the tagen binding generator.
//!
//! - [`schema_from_file`] / [`schema_from_str`] read `ta_func_api.xml` into
//!   the normalized [`tagen_ir::ApiIR`] model.
//! - [`TagenToml`] reads the optional `tagen.toml` project configuration.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod schema;

pub use config::{
    BuildConfig, Config, GenerateConfig, OutputConfig, SchemaConfig, TagenToml, parse_config,
};
pub use error::{Error, Result, SourceContext};
pub use schema::{parse_schema, schema_from_file, schema_from_str};
