//! Schema traversal and display.
//!
//! - [`FunctionGroups`] - Functions grouped by their schema group
//! - [`FunctionListDisplay`] - Declarative function list formatting

mod display;
mod groups;

pub use display::{DisplayStyle, FunctionListDisplay};
pub use groups::{FunctionGroups, UNGROUPED};
