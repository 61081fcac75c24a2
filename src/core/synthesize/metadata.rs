//! Per-component metadata statements.

use swc_ecma_ast::Stmt;
use swc_ecma_visit::VisitMutWith;

use crate::core::ast::{SpanStripper, assign_member_stmt, object_expr};
use crate::core::collect::{Anchor, ComponentEntry};

/// Build `Name[field] = { props: { p: { type: T }, ... } };` for one component.
///
/// Returns `None` when nothing was collected for the component. The statement is
/// paired with the anchor it belongs after.
pub fn build_metadata(entry: ComponentEntry, field: &str) -> Option<(Anchor, Stmt)> {
    if entry.properties.is_empty() {
        return None;
    }

    let props = object_expr(
        entry
            .properties
            .into_iter()
            .map(|(name, type_expr)| (name, object_expr([("type", type_expr)]))),
    );

    let mut stmt = assign_member_stmt(&entry.name, field, object_expr([("props", props)]));
    stmt.visit_mut_with(&mut SpanStripper);

    Some((entry.anchor, stmt))
}
