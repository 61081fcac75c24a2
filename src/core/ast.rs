//! Small constructors for synthesized AST nodes.
//!
//! Every node built here carries `DUMMY_SP` and an empty syntax context; the
//! transform never invents source positions.

use swc_common::{DUMMY_SP, Span};
use swc_ecma_ast::{
    ArrowExpr, AssignExpr, AssignOp, AssignTarget, BinExpr, BinaryOp, BindingIdent, BlockStmt,
    BlockStmtOrExpr, CallExpr, Callee, CondExpr, Decl, Expr, ExprOrSpread, ExprStmt, FnExpr,
    Function, Ident, IdentName, KeyValueProp, Lit, MemberExpr, MemberProp, NewExpr, ObjectLit,
    Pat, Prop, PropName, PropOrSpread, SimpleAssignTarget, Stmt, Str, VarDecl, VarDeclKind,
    VarDeclarator,
};
use swc_ecma_visit::VisitMut;

/// Resets every span in a subtree to `DUMMY_SP`.
pub struct SpanStripper;

impl VisitMut for SpanStripper {
    fn visit_mut_span(&mut self, span: &mut Span) {
        *span = DUMMY_SP;
    }
}

pub fn ident(sym: &str) -> Ident {
    Ident::new_no_ctxt(sym.into(), DUMMY_SP)
}

pub fn ident_expr(sym: &str) -> Box<Expr> {
    Box::new(Expr::Ident(ident(sym)))
}

fn ident_name(sym: &str) -> IdentName {
    IdentName::new(sym.into(), DUMMY_SP)
}

pub fn str_expr(value: &str) -> Box<Expr> {
    Box::new(Expr::Lit(Lit::Str(Str {
        span: DUMMY_SP,
        value: value.into(),
        raw: None,
    })))
}

/// `obj.prop`
pub fn member(obj: Box<Expr>, prop: &str) -> MemberExpr {
    MemberExpr {
        span: DUMMY_SP,
        obj,
        prop: MemberProp::Ident(ident_name(prop)),
    }
}

pub fn member_expr(obj: Box<Expr>, prop: &str) -> Box<Expr> {
    Box::new(Expr::Member(member(obj, prop)))
}

/// `callee(args...)`
pub fn call_expr(callee: Box<Expr>, args: Vec<Box<Expr>>) -> Box<Expr> {
    Box::new(Expr::Call(CallExpr {
        span: DUMMY_SP,
        callee: Callee::Expr(callee),
        args: args.into_iter().map(spread_free).collect(),
        ..Default::default()
    }))
}

/// `new callee(args...)`
pub fn new_expr(callee: Box<Expr>, args: Vec<Box<Expr>>) -> Box<Expr> {
    Box::new(Expr::New(NewExpr {
        span: DUMMY_SP,
        callee,
        args: Some(args.into_iter().map(spread_free).collect()),
        ..Default::default()
    }))
}

fn spread_free(expr: Box<Expr>) -> ExprOrSpread {
    ExprOrSpread { spread: None, expr }
}

/// `{ key: value, ... }` with identifier keys, in the given order.
pub fn object_expr<K: AsRef<str>>(props: impl IntoIterator<Item = (K, Box<Expr>)>) -> Box<Expr> {
    Box::new(Expr::Object(ObjectLit {
        span: DUMMY_SP,
        props: props
            .into_iter()
            .map(|(key, value)| {
                PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp {
                    key: PropName::Ident(ident_name(key.as_ref())),
                    value,
                })))
            })
            .collect(),
    }))
}

/// `(params...) => body`
pub fn arrow_expr(params: &[&str], body: Box<Expr>) -> Box<Expr> {
    Box::new(Expr::Arrow(ArrowExpr {
        span: DUMMY_SP,
        params: params
            .iter()
            .map(|param| Pat::Ident(BindingIdent::from(ident(param))))
            .collect(),
        body: Box::new(BlockStmtOrExpr::Expr(body)),
        ..Default::default()
    }))
}

/// `function () {}`
pub fn empty_fn_expr() -> Box<Expr> {
    Box::new(Expr::Fn(FnExpr {
        ident: None,
        function: Box::new(Function {
            span: DUMMY_SP,
            body: Some(BlockStmt::default()),
            ..Default::default()
        }),
    }))
}

/// `left === right`
pub fn strict_eq(left: Box<Expr>, right: Box<Expr>) -> Box<Expr> {
    Box::new(Expr::Bin(BinExpr {
        span: DUMMY_SP,
        op: BinaryOp::EqEqEq,
        left,
        right,
    }))
}

/// `test ? cons : alt`
pub fn cond_expr(test: Box<Expr>, cons: Box<Expr>, alt: Box<Expr>) -> Box<Expr> {
    Box::new(Expr::Cond(CondExpr {
        span: DUMMY_SP,
        test,
        cons,
        alt,
    }))
}

/// `const name = init;`
pub fn const_decl(name: &str, init: Box<Expr>) -> Stmt {
    Stmt::Decl(Decl::Var(Box::new(VarDecl {
        span: DUMMY_SP,
        kind: VarDeclKind::Const,
        decls: vec![VarDeclarator {
            span: DUMMY_SP,
            name: Pat::Ident(BindingIdent::from(ident(name))),
            init: Some(init),
            definite: false,
        }],
        ..Default::default()
    })))
}

/// `target.field = value;`
pub fn assign_member_stmt(target: &str, field: &str, value: Box<Expr>) -> Stmt {
    Stmt::Expr(ExprStmt {
        span: DUMMY_SP,
        expr: Box::new(Expr::Assign(AssignExpr {
            span: DUMMY_SP,
            op: AssignOp::Assign,
            left: AssignTarget::Simple(SimpleAssignTarget::Member(member(
                ident_expr(target),
                field,
            ))),
            right: value,
        })),
    })
}
