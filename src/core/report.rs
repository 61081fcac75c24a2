//! What a transform run did to one module.

use serde::Serialize;

use crate::core::collect::ComponentKind;

/// Outcome of transforming a single module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformReport {
    /// Identifier the replacement library was bound to.
    pub library: String,
    /// Local name treated as the validation library inside emitted metadata.
    pub alias: String,
    /// Every registered component, in registration order.
    pub components: Vec<ComponentReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentReport {
    pub name: String,
    pub kind: ComponentKind,
    /// Collected property names, in insertion order.
    pub properties: Vec<String>,
    /// True when a metadata statement was inserted for this component.
    pub emitted: bool,
}

impl TransformReport {
    pub fn emitted_count(&self) -> usize {
        self.components.iter().filter(|c| c.emitted).count()
    }

    pub fn property_count(&self) -> usize {
        self.components.iter().map(|c| c.properties.len()).sum()
    }
}
