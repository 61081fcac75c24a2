//! Parsing helpers shared by unit tests.

use std::sync::Arc;

use swc_common::SourceMap;
use swc_ecma_ast::{Module, ModuleItem, Stmt};

use crate::core::parsers::source::parse_source;

/// Parse `code` as a JSX module.
pub fn parse_module(code: &str) -> Module {
    parse_source(code.to_string(), "test.jsx", Arc::new(SourceMap::default()))
        .expect("test source should parse")
        .module
}

/// Parse `code` and return its first top-level statement.
pub fn parse_stmt(code: &str) -> Stmt {
    match parse_module(code).body.remove(0) {
        ModuleItem::Stmt(stmt) => stmt,
        other => panic!("expected statement, got {:?}", other),
    }
}
