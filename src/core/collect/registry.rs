//! Component registry populated during collection and consumed once by synthesis.

use indexmap::IndexMap;
use swc_ecma_ast::{Expr, ObjectLit, Prop, PropName, PropOrSpread};
use swc_ecma_visit::VisitMutWith;
use tracing::trace;

use super::shapes::ComponentKind;
use crate::core::ast::SpanStripper;

/// Position of a top-level statement in `Module::body`.
///
/// Anchors are recorded while the module is only borrowed, and stay valid as
/// long as nothing inserts or removes top-level statements before synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Anchor(pub usize);

/// A discovered top-level component.
#[derive(Debug, Clone)]
pub struct ComponentEntry {
    pub name: String,
    pub kind: ComponentKind,
    /// Declaration the metadata statement is inserted after.
    pub anchor: Anchor,
    /// Property name to a location-stripped copy of its type expression.
    pub properties: IndexMap<String, Box<Expr>>,
}

impl ComponentEntry {
    fn new(name: &str, kind: ComponentKind, anchor: Anchor) -> Self {
        Self {
            name: name.to_string(),
            kind,
            anchor,
            properties: IndexMap::new(),
        }
    }

    /// Record every identifier-keyed property of a `propTypes` object literal.
    ///
    /// Returns how many properties were taken. Computed, string, and numeric keys,
    /// methods, accessors, and spreads are skipped without affecting siblings.
    pub fn collect_properties(&mut self, object: &ObjectLit) -> usize {
        let mut taken = 0;

        for prop in &object.props {
            let PropOrSpread::Prop(prop) = prop else {
                trace!(component = %self.name, "skipping spread in propTypes");
                continue;
            };

            let (name, value) = match &**prop {
                Prop::KeyValue(kv) => match &kv.key {
                    PropName::Ident(key) => (key.sym.to_string(), kv.value.clone()),
                    _ => {
                        trace!(component = %self.name, "skipping non-identifier propTypes key");
                        continue;
                    }
                },
                Prop::Shorthand(ident) => {
                    (ident.sym.to_string(), Box::new(Expr::Ident(ident.clone())))
                }
                _ => continue,
            };

            let mut value = value;
            value.visit_mut_with(&mut SpanStripper);
            self.properties.insert(name, value);
            taken += 1;
        }

        taken
    }
}

/// Components keyed by name, in order of first registration.
#[derive(Debug, Default)]
pub struct Registry {
    entries: IndexMap<String, ComponentEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component declaration.
    ///
    /// Re-registering a name moves its anchor to the newer declaration and keeps
    /// the properties already collected under that name.
    pub fn register(&mut self, name: &str, kind: ComponentKind, anchor: Anchor) {
        match self.entries.get_mut(name) {
            Some(entry) => {
                entry.kind = kind;
                entry.anchor = anchor;
            }
            None => {
                self.entries
                    .insert(name.to_string(), ComponentEntry::new(name, kind, anchor));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ComponentEntry> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ComponentEntry> {
        self.entries.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentEntry> {
        self.entries.values()
    }

    /// Consume the registry, yielding entries in registration order.
    pub fn into_entries(self) -> impl Iterator<Item = ComponentEntry> {
        self.entries.into_values()
    }
}
