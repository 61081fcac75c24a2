//! proptypes-meta - static `propTypes` to runtime metadata transform
//!
//! Finds React components declared at the top level of an ECMAScript module,
//! collects the property-type declarations attached to them (static class
//! fields or post-hoc `Component.propTypes = {...}` assignments), and inserts a
//! `Component.__metadata = { props: { ... } }` statement after each declaration.
//! The type expressions are rewritten to point at a generated stand-in library,
//! so the metadata can be read at runtime without the real validation package.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (`ptmeta inspect`, `ptmeta transform`, `ptmeta init`)
//! - `config`: Configuration file loading and parsing
//! - `core`: Transform engine (two-phase pipeline), parser front end, code printer, file scanner

pub mod cli;
pub mod config;
pub mod core;
