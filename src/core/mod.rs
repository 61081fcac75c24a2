//! Core transform engine (two-phase pipeline).
//!
//! 1. `collect`: walk the top-level statements once, registering components,
//!    their `propTypes`, and the validation library alias
//! 2. `synthesize`: insert the replacement library and one metadata statement
//!    per component that declared property types
//!
//! `transform` composes the two. Everything here operates on an already parsed
//! swc `Module`; `parsers` and `scanner` are the file-facing front end and
//! `emit` prints the result back to source text.

pub mod ast;
pub mod collect;
pub mod emit;
pub mod options;
pub mod parsers;
pub mod report;
pub mod scanner;
pub mod synthesize;
pub mod transform;

#[cfg(test)]
pub(crate) mod test_utils;

pub use collect::{Collection, collect};
pub use emit::{EmittedModule, emit_module, transform_source};
pub use options::TransformOptions;
pub use report::{ComponentReport, TransformReport};
pub use synthesize::synthesize;
pub use transform::transform;
