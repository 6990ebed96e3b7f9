//! The `binding.gyp` build descriptor.

use std::path::{Path, PathBuf};

use serde_json::json;
use tagen_core::GeneratedFile;

/// One gyp build target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub sources: Vec<String>,
    pub include_dirs: Vec<String>,
}

/// `binding.gyp`: a single target listing every native source and include
/// directory.
pub struct BindingGyp<'a> {
    path: &'a Path,
    target: &'a Target,
}

impl<'a> BindingGyp<'a> {
    pub fn new(path: &'a Path, target: &'a Target) -> Self {
        Self { path, target }
    }
}

impl GeneratedFile for BindingGyp<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.path)
    }

    fn render(&self) -> String {
        let document = json!({
            "targets": [{
                "target_name": self.target.name,
                "sources": self.target.sources,
                "include_dirs": self.target.include_dirs,
            }]
        });
        format!("{:#}\n", document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_keeps_key_order() {
        let target = Target {
            name: "talib_binding".to_string(),
            sources: vec!["a.c".to_string(), "src/binding.cc".to_string()],
            include_dirs: vec!["inc".to_string()],
        };

        let out = BindingGyp::new(Path::new("binding.gyp"), &target).render();

        assert_eq!(
            out,
            r#"{
  "targets": [
    {
      "target_name": "talib_binding",
      "sources": [
        "a.c",
        "src/binding.cc"
      ],
      "include_dirs": [
        "inc"
      ]
    }
  ]
}
"#
        );
    }
}
