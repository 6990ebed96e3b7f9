//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the schema file.
    pub schema_path: PathBuf,
    /// Number of selected functions that were resolved.
    pub function_count: usize,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.schema_path.display()));
            out.key_value("Functions", &self.function_count.to_string());
        } else {
            out.preformatted(&format!(
                "✗ {} has {} error(s)",
                self.schema_path.display(),
                self.errors.len()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::CapturedOutput;

    #[test]
    fn test_invalid_report() {
        let report = CheckReport {
            schema_path: PathBuf::from("ta_func_api.xml"),
            function_count: 0,
            errors: vec!["unknown function 'NOPE'".to_string()],
            warnings: vec![],
        };

        let mut out = CapturedOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "error: unknown function 'NOPE'",
                "",
                "✗ ta_func_api.xml has 1 error(s)",
            ]
        );
    }

    #[test]
    fn test_valid_report() {
        let report = CheckReport {
            schema_path: PathBuf::from("ta_func_api.xml"),
            function_count: 158,
            errors: vec![],
            warnings: vec![],
        };

        let mut out = CapturedOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines, ["✓ ta_func_api.xml is valid", "Functions: 158"]);
    }
}
