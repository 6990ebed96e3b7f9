//! Diagnostic types for the compilation pipeline.
//!
//! Phases and lints report problems as [`Diagnostic`]s instead of failing on
//! the first one, so a single run lists every offending argument.

use std::fmt;

use serde::Serialize;
use tagen_ir::Role;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// A fatal error that prevents generation.
    Error,
    /// A warning that doesn't prevent generation.
    Warning,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Where in the schema a diagnostic applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Function abbreviation.
    pub function: String,
    /// Argument role and zero-based position within that role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<(Role, usize)>,
}

impl Location {
    /// A whole function.
    pub fn function(abbreviation: impl Into<String>) -> Self {
        Self {
            function: abbreviation.into(),
            argument: None,
        }
    }

    /// One argument of a function.
    pub fn argument(abbreviation: impl Into<String>, role: Role, index: usize) -> Self {
        Self {
            function: abbreviation.into(),
            argument: Some((role, index)),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.function)?;
        if let Some((role, index)) = self.argument {
            let group = match role {
                Role::Required => "required",
                Role::Optional => "optional",
                Role::Output => "outputs",
            };
            write!(f, ".{}[{}]", group, index)?;
        }
        Ok(())
    }
}

/// A diagnostic message from a compilation phase.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The phase that produced this diagnostic.
    pub phase: String,
    /// The diagnostic message.
    pub message: String,
    /// Optional location in the schema.
    pub location: Option<Location>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, phase, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, phase, message)
    }

    fn new(severity: Severity, phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error("validate", "duplicate abbreviation");
        assert!(diag.severity.is_error());
        assert_eq!(diag.phase, "validate");
        assert_eq!(diag.to_string(), "error: duplicate abbreviation");
    }

    #[test]
    fn test_diagnostic_with_location() {
        let diag = Diagnostic::warning("validate", "missing description")
            .at(Location::argument("SMA", Role::Optional, 0));

        assert_eq!(
            diag.to_string(),
            "warning: missing description (at SMA.optional[0])"
        );
    }

    #[test]
    fn test_location_display() {
        assert_eq!(Location::function("MACD").to_string(), "MACD");
        assert_eq!(
            Location::argument("MACD", Role::Output, 2).to_string(),
            "MACD.outputs[2]"
        );
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
