use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for tagen-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "tagen.toml");
/// ctx.validation_error("build.target must not be empty");
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a schema error from a quick-xml deserialization error.
    pub fn xml_error(&self, source: quick_xml::DeError) -> Box<Error> {
        Box::new(Error::Xml {
            src: self.named_source(),
            source,
        })
    }

    /// Create a config parse error from a toml error.
    pub fn config_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `needle` when it occurs in the source.
    pub fn validation_error(&self, message: impl Into<String>, needle: &str) -> Box<Error> {
        let span = find_span(&self.src, needle);
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

fn find_span(src: &str, needle: &str) -> Option<SourceSpan> {
    if needle.is_empty() {
        return None;
    }
    src.find(needle)
        .map(|offset| SourceSpan::from((offset, needle.len())))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(tagen::io_error),
        help("check the path or set it in tagen.toml")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse function schema")]
    #[diagnostic(
        code(tagen::schema_error),
        help("the schema must be a <FinancialFunctions> document such as ta_func_api.xml")
    )]
    Xml {
        #[source_code]
        src: NamedSource<String>,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("failed to parse tagen.toml")]
    #[diagnostic(code(tagen::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(tagen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_span() {
        let span = find_span("target = \"bad name\"", "bad name").unwrap();
        assert_eq!(span.offset(), 10);
        assert_eq!(span.len(), 8);
        assert!(find_span("abc", "xyz").is_none());
        assert!(find_span("abc", "").is_none());
    }

    #[test]
    fn test_validation_error_message() {
        let ctx = SourceContext::new("x = 1", "tagen.toml");
        let err = ctx.validation_error("bad value", "1");
        assert_eq!(err.to_string(), "bad value");
        assert_eq!(ctx.filename(), "tagen.toml");
    }
}
