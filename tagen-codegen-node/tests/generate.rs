//! End-to-end tests for the native binding and build descriptor generators.

use std::fs;

use tagen_codegen::testing;
use tagen_codegen_node::{ArtifactCodegen, BuildGenerator, Generator};
use tagen_core::WriteResult;
use tagen_ir::{Argument, FunctionSpec, RequiredInput};
use tempfile::TempDir;

#[test]
fn test_preview_uses_configured_path_and_target() {
    let api = testing::all();
    let preview = Generator::new(&api)
        .path("native/addon.cc")
        .target("addon")
        .preview()
        .unwrap();

    assert_eq!(preview.path, "native/addon.cc");
    assert!(preview.content.contains("void TA_FUNC_SMA("));
    assert!(preview.content.contains("void TA_FUNC_MAVP("));
    assert!(preview.content.ends_with("NODE_MODULE(addon, Init)\n"));
}

#[test]
fn test_render_is_deterministic() {
    let api = testing::all();
    let generator = Generator::new(&api);

    let first = generator.preview().unwrap();
    let second = generator.preview().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_second_generate_is_unchanged() {
    let temp = TempDir::new().unwrap();
    let api = testing::api([testing::sma(), testing::sar()]);
    let generator = Generator::new(&api);

    let first = generator.generate(temp.path()).unwrap();
    let second = generator.generate(temp.path()).unwrap();

    assert_eq!(first.artifact, "binding");
    assert_eq!(first.path, temp.path().join(Generator::DEFAULT_PATH));
    assert!(matches!(first.write, WriteResult::Written { .. }));
    assert_eq!(second.write, WriteResult::Unchanged);

    let written = fs::read_to_string(&first.path).unwrap();
    assert_eq!(written, generator.preview().unwrap().content);
}

#[test]
fn test_unrecognized_type_fails_before_writing() {
    let temp = TempDir::new().unwrap();
    let mut broken = testing::sma();
    broken.required = vec![RequiredInput {
        arg: Argument::new("inReal", "Float Array"),
    }];
    let api = testing::api([broken]);

    let err = Generator::new(&api).generate(temp.path()).unwrap_err();

    assert!(err.to_string().contains("Float Array"));
    assert!(!temp.path().join(Generator::DEFAULT_PATH).exists());
}

#[test]
fn test_missing_outputs_are_rejected() {
    let api = testing::api([FunctionSpec {
        outputs: vec![],
        ..testing::sma()
    }]);

    assert!(Generator::new(&api).preview().is_err());
}

#[test]
fn test_abbreviation_must_be_an_identifier() {
    let temp = TempDir::new().unwrap();
    let api = testing::api([FunctionSpec {
        abbreviation: "MY-FN 2".to_string(),
        ..testing::sma()
    }]);
    let generator = Generator::new(&api);

    let err = generator.preview().unwrap_err();
    assert!(err.to_string().contains("MY-FN 2"));
    assert!(generator.generate(temp.path()).is_err());
    assert!(!temp.path().join(Generator::DEFAULT_PATH).exists());
}

#[test]
fn test_build_descriptor_lists_binding_last() {
    let temp = testing::native_tree(&[
        "ta-lib/c/src/ta_func/ta_SMA.c",
        "ta-lib/c/src/ta_common/ta_global.c",
        "ta-lib/c/include/ta_libc.h",
    ])
    .unwrap();

    let preview = BuildGenerator::new(temp.path())
        .target("addon")
        .preview()
        .unwrap();

    assert_eq!(preview.path, "binding.gyp");
    insta::assert_snapshot!(preview.content, @r#"
    {
      "targets": [
        {
          "target_name": "addon",
          "sources": [
            "ta-lib/c/src/ta_common/ta_global.c",
            "ta-lib/c/src/ta_func/ta_SMA.c",
            "src/talib-binding.generated.cc"
          ],
          "include_dirs": [
            "ta-lib/c/include",
            "ta-lib/c/src/ta_common",
            "ta-lib/c/src/ta_func",
            "<!(node -e \"require('nan')\")"
          ]
        }
      ]
    }
    "#);
}

#[test]
fn test_build_descriptor_without_sources() {
    let temp = TempDir::new().unwrap();

    let target = BuildGenerator::new(temp.path())
        .binding("native/addon.cc")
        .build_target()
        .unwrap();

    assert_eq!(target.name, "talib_binding");
    assert_eq!(target.sources, ["native/addon.cc"]);
    assert_eq!(target.include_dirs, ["<!(node -e \"require('nan')\")"]);
}

#[test]
fn test_build_generate_writes_descriptor() {
    let temp = testing::native_tree(&["ta-lib/c/src/ta_func/ta_SMA.c"]).unwrap();

    let result = BuildGenerator::new(temp.path())
        .generate(temp.path())
        .unwrap();

    assert_eq!(result.artifact, "build");
    assert_eq!(result.path, temp.path().join("binding.gyp"));
    let written = fs::read_to_string(&result.path).unwrap();
    assert!(written.contains("\"ta-lib/c/src/ta_func/ta_SMA.c\""));
}
