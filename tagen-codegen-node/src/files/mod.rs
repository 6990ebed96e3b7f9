//! Generated files.

mod binding_cc;
mod binding_gyp;
mod native_function;

pub use binding_cc::BindingCc;
pub use binding_gyp::{BindingGyp, Target};
use native_function::NativeFunction;
