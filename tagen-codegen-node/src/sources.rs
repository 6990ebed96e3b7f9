//! Native source and include directory discovery.

use std::path::Path;

use eyre::Result;

/// Native source patterns, relative to the project root.
pub const SOURCE_PATTERNS: &[&str] = &[
    "ta-lib/c/src/ta_abstract/*.c",
    "ta-lib/c/src/ta_abstract/frames/*.c",
    "ta-lib/c/src/ta_abstract/tables/*.c",
    "ta-lib/c/src/ta_common/*.c",
    "ta-lib/c/src/ta_func/*.c",
];

/// Sources matched by [`SOURCE_PATTERNS`] that must not be compiled.
pub const EXCLUDED_SOURCES: &[&str] = &["ta-lib/c/src/ta_abstract/excel_glue.c"];

/// Include directory patterns, relative to the project root.
pub const INCLUDE_PATTERNS: &[&str] = &[
    "ta-lib/c/include",
    "ta-lib/c/src/ta_abstract",
    "ta-lib/c/src/ta_abstract/frames",
    "ta-lib/c/src/ta_common",
    "ta-lib/c/src/ta_func",
];

/// Include directory of the nan headers, resolved by node-gyp.
pub const NAN_INCLUDE: &str = "<!(node -e \"require('nan')\")";

/// Paths found under a project root, relative and `/`-separated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSources {
    pub sources: Vec<String>,
    pub include_dirs: Vec<String>,
}

impl BuildSources {
    /// Scan `root` for native sources and include directories.
    ///
    /// Matches keep pattern order, then lexical order within a pattern.
    pub fn scan(root: &Path) -> Result<Self> {
        let mut sources = Vec::new();
        for pattern in SOURCE_PATTERNS {
            for path in expand(root, pattern)? {
                if !EXCLUDED_SOURCES.contains(&path.as_str()) && !sources.contains(&path) {
                    sources.push(path);
                }
            }
        }

        let mut include_dirs = Vec::new();
        for pattern in INCLUDE_PATTERNS {
            for path in expand(root, pattern)? {
                if root.join(&path).is_dir() && !include_dirs.contains(&path) {
                    include_dirs.push(path);
                }
            }
        }

        if sources.is_empty() {
            tracing::warn!(root = %root.display(), "no native sources found");
        }
        tracing::debug!(
            sources = sources.len(),
            include_dirs = include_dirs.len(),
            "scanned native sources"
        );

        Ok(Self {
            sources,
            include_dirs,
        })
    }
}

/// Expand one pattern under `root` into sorted relative paths.
fn expand(root: &Path, pattern: &str) -> Result<Vec<String>> {
    let base = glob::Pattern::escape(&root.to_string_lossy());
    let full = format!("{}/{}", base.trim_end_matches('/'), pattern);

    let mut paths = Vec::new();
    for entry in glob::glob(&full)? {
        let path = entry?;
        if let Ok(relative) = path.strip_prefix(root) {
            paths.push(to_slash(relative));
        }
    }
    paths.sort();
    Ok(paths)
}

fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use tagen_codegen::testing;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_scan_collects_sources_in_pattern_order() {
        let temp = testing::native_tree(&[
            "ta-lib/c/src/ta_func/ta_SMA.c",
            "ta-lib/c/src/ta_func/ta_MACD.c",
            "ta-lib/c/src/ta_func/ta_utility.h",
            "ta-lib/c/src/ta_abstract/ta_abstract.c",
            "ta-lib/c/src/ta_abstract/excel_glue.c",
            "ta-lib/c/src/ta_abstract/frames/ta_frame.c",
            "ta-lib/c/src/ta_common/ta_global.c",
            "ta-lib/c/include/ta_libc.h",
        ])
        .unwrap();

        let found = BuildSources::scan(temp.path()).unwrap();

        assert_eq!(
            found.sources,
            [
                "ta-lib/c/src/ta_abstract/ta_abstract.c",
                "ta-lib/c/src/ta_abstract/frames/ta_frame.c",
                "ta-lib/c/src/ta_common/ta_global.c",
                "ta-lib/c/src/ta_func/ta_MACD.c",
                "ta-lib/c/src/ta_func/ta_SMA.c",
            ]
        );
        assert_eq!(
            found.include_dirs,
            [
                "ta-lib/c/include",
                "ta-lib/c/src/ta_abstract",
                "ta-lib/c/src/ta_abstract/frames",
                "ta-lib/c/src/ta_common",
                "ta-lib/c/src/ta_func",
            ]
        );
    }

    #[test]
    fn test_scan_empty_root() {
        let temp = TempDir::new().unwrap();

        let found = BuildSources::scan(temp.path()).unwrap();

        assert_eq!(found, BuildSources::default());
    }
}
