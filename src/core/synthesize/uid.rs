//! Collision-free identifier generation.

use std::collections::HashSet;

use swc_ecma_ast::{Ident, Module};
use swc_ecma_visit::{Visit, VisitWith};

/// Every identifier spelled anywhere in a module, bindings and references alike.
#[derive(Default)]
struct UsedNames {
    names: HashSet<String>,
}

impl Visit for UsedNames {
    fn visit_ident(&mut self, node: &Ident) {
        self.names.insert(node.sym.to_string());
    }
}

/// Generate an identifier based on `base` that no identifier in `module` uses.
///
/// Candidates are `_base`, `_base2`, `_base3`, ... after stripping leading
/// underscores and trailing digits from `base`.
pub fn generate_uid(module: &Module, base: &str) -> String {
    let mut used = UsedNames::default();
    module.visit_with(&mut used);

    let base = uid_base(base);
    (1..)
        .map(|i| {
            if i > 1 {
                format!("_{}{}", base, i)
            } else {
                format!("_{}", base)
            }
        })
        .find(|candidate| !used.names.contains(candidate.as_str()))
        .unwrap_or_default()
}

fn uid_base(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '$')
        .collect();
    let trimmed = cleaned
        .trim_start_matches('_')
        .trim_end_matches(|c: char| c.is_ascii_digit());

    if trimmed.is_empty() {
        "ref".to_string()
    } else {
        trimmed.to_string()
    }
}
