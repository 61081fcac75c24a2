//! The no-op stand-in for the validation library.

use swc_ecma_ast::Stmt;

use crate::core::ast::{
    arrow_expr, cond_expr, const_decl, empty_fn_expr, ident_expr, new_expr, object_expr,
    str_expr, strict_eq,
};
use crate::core::options::IS_REQUIRED;

/// Build the replacement library bound to `name`:
///
/// ```js
/// const name = new Proxy(function () {}, {
///   get: (target, key) => key === "isRequired" ? (type) => type : name,
///   apply: () => name,
/// });
/// ```
///
/// Any member access or call on it yields the library again, so validator
/// chains such as `name.shape({...})` or `name.arrayOf(name.number)` evaluate
/// harmlessly, and `name.isRequired(type)` hands `type` back unchanged.
pub fn build_library(name: &str) -> Stmt {
    let get = arrow_expr(
        &["target", "key"],
        cond_expr(
            strict_eq(ident_expr("key"), str_expr(IS_REQUIRED)),
            arrow_expr(&["type"], ident_expr("type")),
            ident_expr(name),
        ),
    );
    let apply = arrow_expr(&[], ident_expr(name));

    const_decl(
        name,
        new_expr(
            ident_expr("Proxy"),
            vec![empty_fn_expr(), object_expr([("get", get), ("apply", apply)])],
        ),
    )
}
