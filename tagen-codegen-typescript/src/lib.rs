//! TypeScript declaration generator for tagen.
//!
//! Produces `talib-binding.generated.d.ts`, the typed surface of the native
//! addon: the `MATypes` enum, the `Record` interface and, per function, an
//! array overload and a record overload with JSDoc.
//!
//! ```ignore
//! use tagen_codegen_typescript::{ArtifactCodegen, Generator};
//!
//! let api = tagen_schema::schema_from_file("ta-lib/ta_func_api.xml")?;
//! let preview = Generator::new(&api).preview()?;
//! ```

mod generator;
mod type_mapper;

pub mod files;

pub use generator::Generator;
pub use tagen_codegen::language::{ArtifactCodegen, GenerateResult, PreviewFile};
pub use type_mapper::TypeScriptTypeMapper;
