//! Reference rewriting inside freshly built metadata statements.

use swc_common::util::take::Take;
use swc_ecma_ast::{Expr, Ident, MemberExpr, MemberProp, Stmt};
use swc_ecma_visit::{VisitMut, VisitMutWith};

use crate::core::ast::{call_expr, ident_expr, member_expr};
use crate::core::collect::shapes::unwrap_parens;
use crate::core::options::IS_REQUIRED;

/// Retargets a metadata statement from the validation library to its replacement.
///
/// - identifiers spelled like the library alias are renamed to the replacement
/// - `<call or member>.isRequired` becomes `<replacement>.isRequired(<call or member>)`,
///   with any parentheses around the call or member dropped
struct ReferenceRewriter<'a> {
    alias: &'a str,
    library: &'a str,
}

impl VisitMut for ReferenceRewriter<'_> {
    fn visit_mut_ident(&mut self, node: &mut Ident) {
        if &*node.sym == self.alias {
            node.sym = self.library.into();
        }
    }

    fn visit_mut_expr(&mut self, node: &mut Expr) {
        node.visit_mut_children_with(self);

        if let Expr::Member(MemberExpr {
            obj,
            prop: MemberProp::Ident(prop),
            ..
        }) = node
            && &*prop.sym == IS_REQUIRED
            && matches!(unwrap_parens(obj), Expr::Call(_) | Expr::Member(_))
        {
            let validator = strip_parens(obj.take());
            *node = *call_expr(
                member_expr(ident_expr(self.library), IS_REQUIRED),
                vec![validator],
            );
        }
    }
}

fn strip_parens(expr: Box<Expr>) -> Box<Expr> {
    match *expr {
        Expr::Paren(paren) => strip_parens(paren.expr),
        other => Box::new(other),
    }
}

/// Rewrite a statement the transform just built; the rest of the module is never visited.
pub fn rewrite_references(mut stmt: Stmt, alias: &str, library: &str) -> Stmt {
    stmt.visit_mut_with(&mut ReferenceRewriter { alias, library });
    stmt
}
