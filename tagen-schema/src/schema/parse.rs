//! Schema parsing from files and strings.

use std::path::Path;

use tagen_ir::ApiIR;

use super::{RawFunctions, flatten};
use crate::{Error, Result, error::SourceContext};

/// Parse a schema file from the given path.
pub fn schema_from_file(path: impl AsRef<Path>) -> Result<ApiIR> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    parse_schema(&content, &path.display().to_string())
}

/// Parse a schema from a string (uses "ta_func_api.xml" as default filename).
pub fn schema_from_str(content: &str) -> Result<ApiIR> {
    parse_schema(content, "ta_func_api.xml")
}

/// Parse a schema from content with the given filename for error reporting.
pub fn parse_schema(content: &str, filename: &str) -> Result<ApiIR> {
    let source_ctx = SourceContext::new(content, filename);
    let raw: RawFunctions =
        quick_xml::de::from_str(content).map_err(|e| source_ctx.xml_error(e))?;
    Ok(flatten(raw))
}
