//! Intermediate representation types for the tagen binding generator.
//!
//! This crate provides the normalized model of the TA-Lib function API that
//! every generator consumes. The types are plain data: no resolution, no
//! naming, no emission logic.
//!
//! # Architecture
//!
//! ```text
//! ta_func_api.xml → tagen-schema (parsing) → tagen-ir (model) → codegen
//! ```

mod api;
mod types;

pub use api::{ApiIR, Argument, FunctionSpec, OptionalInput, OutputArgument, Range, RequiredInput};
pub use types::{MaType, RecordField, Role};
