//! Static `propTypes` class fields.

use swc_ecma_ast::{ClassDecl, ClassProp, Expr, ObjectLit, PropName};
use swc_ecma_visit::{Visit, VisitWith};
use tracing::trace;

use super::registry::ComponentEntry;
use super::shapes::unwrap_parens;
use crate::core::options::PROP_TYPES_FIELD;

/// Collects `static propTypes = { ... }` fields of one component class.
///
/// Fields are attributed to the nearest enclosing class declaration. Class
/// expressions are transparent; a class declaration nested anywhere inside the
/// component hides its own fields, since nested declarations are never components.
pub struct StaticPropTypesCollector<'a> {
    entry: &'a mut ComponentEntry,
    /// Class declarations entered, the component itself being 1.
    class_depth: usize,
}

impl<'a> StaticPropTypesCollector<'a> {
    /// Walk `class` and record its static `propTypes` into `entry`.
    pub fn collect(class: &ClassDecl, entry: &'a mut ComponentEntry) {
        let mut collector = Self {
            entry,
            class_depth: 0,
        };
        class.visit_with(&mut collector);
    }
}

impl Visit for StaticPropTypesCollector<'_> {
    fn visit_class_decl(&mut self, node: &ClassDecl) {
        self.class_depth += 1;
        node.visit_children_with(self);
        self.class_depth -= 1;
    }

    fn visit_class_prop(&mut self, node: &ClassProp) {
        if self.class_depth == 1
            && let Some(object) = static_prop_types(node)
        {
            let taken = self.entry.collect_properties(object);
            trace!(component = %self.entry.name, taken, "static propTypes field");
        }
        node.visit_children_with(self);
    }
}

/// The object literal of `static propTypes = { ... }`, if `prop` is one.
fn static_prop_types(prop: &ClassProp) -> Option<&ObjectLit> {
    if !prop.is_static {
        return None;
    }
    let PropName::Ident(key) = &prop.key else {
        return None;
    };
    if key.sym.as_str() != PROP_TYPES_FIELD {
        return None;
    }
    match prop.value.as_deref().map(unwrap_parens) {
        Some(Expr::Object(object)) => Some(object),
        _ => None,
    }
}
