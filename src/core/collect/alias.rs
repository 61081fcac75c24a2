//! Resolution of the local name bound to the validation library's default export.

use swc_ecma_ast::{ImportDecl, ImportSpecifier};
use tracing::debug;

/// Tracks which local identifier refers to the validation library.
///
/// Starts at the conventional name and is overwritten by every top-level
/// `import X from '<library>'`, so the last such import wins.
#[derive(Debug, Clone)]
pub struct AliasResolver {
    library_source: String,
    alias: String,
}

impl AliasResolver {
    pub fn new(library_source: &str, default_alias: &str) -> Self {
        Self {
            library_source: library_source.to_string(),
            alias: default_alias.to_string(),
        }
    }

    /// Inspect a top-level import declaration.
    ///
    /// Imports of other modules, and imports of the library without a default
    /// binding (`import { string } from ...`, `import * as T from ...`), leave
    /// the alias unchanged.
    pub fn observe(&mut self, import: &ImportDecl) {
        if import.src.value.as_str() != Some(self.library_source.as_str()) {
            return;
        }

        let default_binding = import.specifiers.iter().find_map(|spec| match spec {
            ImportSpecifier::Default(default) => Some(&default.local),
            _ => None,
        });

        if let Some(local) = default_binding {
            debug!(alias = %local.sym, "resolved validation library alias");
            self.alias = local.sym.to_string();
        }
    }

    pub fn into_alias(self) -> String {
        self.alias
    }
}
