//! Native (C++/nan) binding and build descriptor generation.
//!
//! - [`Generator`] renders `talib-binding.generated.cc`
//! - [`BuildGenerator`] renders `binding.gyp`

mod generator;
mod sources;
mod type_mapper;

pub mod files;

pub use generator::{BuildGenerator, DEFAULT_TARGET, Generator};
pub use sources::{BuildSources, EXCLUDED_SOURCES, INCLUDE_PATTERNS, NAN_INCLUDE, SOURCE_PATTERNS};
pub use tagen_codegen::language::{ArtifactCodegen, GenerateResult, PreviewFile};
pub use type_mapper::NativeTypeMapper;
