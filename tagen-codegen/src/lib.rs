//! Shared code generation utilities for the tagen binding generator.
//!
//! This crate provides the target-agnostic half of generation, used by the
//! artifact generators (`tagen-codegen-node`, `tagen-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware code emission (CodeBuilder, Indent)
//! - [`resolve`] - Names, argument kinds, defaults and signatures
//! - [`pipeline`] - Validation and selection phases with plugin hooks
//! - [`schema`] - Grouping and display of the function list
//! - [`language`] - Artifact generator abstractions (ArtifactCodegen, TypeMapper)
//! - [`testing`] - Test fixtures (feature-gated)

pub mod builder;
pub mod language;
pub mod pipeline;
pub mod resolve;
pub mod schema;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
