//! Classification of top-level module items into the shapes the collector acts on.
//!
//! Anything that is not one of the recognized shapes is `TopLevelItem::Other`,
//! so unsupported syntax is an explicit case rather than a silent fallthrough.

use serde::Serialize;
use swc_ecma_ast::{
    AssignOp, AssignTarget, ClassDecl, Decl, Expr, FnDecl, Ident, ImportDecl, MemberProp,
    ModuleDecl, ModuleItem, ObjectLit, Pat, SimpleAssignTarget, Stmt, VarDecl,
};

use crate::core::options::PROP_TYPES_FIELD;

/// How a component was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    /// `class Foo { ... }`
    Class,
    /// `function Foo() { ... }`
    Function,
    /// `const Foo = function () { ... }` or `const Foo = () => ...`
    FunctionValue,
}

/// A top-level declaration that registers a component.
#[derive(Debug, Clone, Copy)]
pub enum ComponentDecl<'a> {
    Class(&'a ClassDecl),
    Function(&'a FnDecl),
    FunctionValue { name: &'a Ident, decl: &'a VarDecl },
}

impl<'a> ComponentDecl<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            ComponentDecl::Class(class) => class.ident.sym.as_str(),
            ComponentDecl::Function(func) => func.ident.sym.as_str(),
            ComponentDecl::FunctionValue { name, .. } => name.sym.as_str(),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match *self {
            ComponentDecl::Class(_) => ComponentKind::Class,
            ComponentDecl::Function(_) => ComponentKind::Function,
            ComponentDecl::FunctionValue { .. } => ComponentKind::FunctionValue,
        }
    }
}

/// One statement of the module's top-level statement list, as the collector sees it.
#[derive(Debug, Clone, Copy)]
pub enum TopLevelItem<'a> {
    /// Any import declaration; the alias resolver decides whether it is relevant.
    Import(&'a ImportDecl),
    /// A class, function, or function-valued variable declaration.
    Component(ComponentDecl<'a>),
    /// `Foo.propTypes = { ... }`
    PropTypesAssignment {
        component: &'a Ident,
        props: &'a ObjectLit,
    },
    Other,
}

pub fn classify(item: &ModuleItem) -> TopLevelItem<'_> {
    match item {
        ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => TopLevelItem::Import(import),
        ModuleItem::ModuleDecl(_) => TopLevelItem::Other,
        ModuleItem::Stmt(stmt) => classify_stmt(stmt),
    }
}

fn classify_stmt(stmt: &Stmt) -> TopLevelItem<'_> {
    match stmt {
        Stmt::Decl(Decl::Class(class)) => TopLevelItem::Component(ComponentDecl::Class(class)),
        Stmt::Decl(Decl::Fn(func)) => TopLevelItem::Component(ComponentDecl::Function(func)),
        Stmt::Decl(Decl::Var(var)) => match function_valued_name(var) {
            Some(name) => {
                TopLevelItem::Component(ComponentDecl::FunctionValue { name, decl: var })
            }
            None => TopLevelItem::Other,
        },
        Stmt::Expr(expr_stmt) => match prop_types_assignment(&expr_stmt.expr) {
            Some((component, props)) => TopLevelItem::PropTypesAssignment { component, props },
            None => TopLevelItem::Other,
        },
        _ => TopLevelItem::Other,
    }
}

/// Name bound by the first declarator when its initializer is a function or arrow.
fn function_valued_name(var: &VarDecl) -> Option<&Ident> {
    let declarator = var.decls.first()?;
    let Pat::Ident(binding) = &declarator.name else {
        return None;
    };
    let init = declarator.init.as_deref()?;
    match unwrap_parens(init) {
        Expr::Fn(_) | Expr::Arrow(_) => Some(&binding.id),
        _ => None,
    }
}

/// Match `<ident>.propTypes = <object literal>`.
fn prop_types_assignment(expr: &Expr) -> Option<(&Ident, &ObjectLit)> {
    let Expr::Assign(assign) = expr else {
        return None;
    };
    if assign.op != AssignOp::Assign {
        return None;
    }
    let AssignTarget::Simple(SimpleAssignTarget::Member(member)) = &assign.left else {
        return None;
    };
    let MemberProp::Ident(prop) = &member.prop else {
        return None;
    };
    if prop.sym.as_str() != PROP_TYPES_FIELD {
        return None;
    }
    let Expr::Ident(component) = &*member.obj else {
        return None;
    };
    match unwrap_parens(&assign.right) {
        Expr::Object(props) => Some((component, props)),
        _ => None,
    }
}

/// Strip any number of wrapping parentheses.
pub fn unwrap_parens(mut expr: &Expr) -> &Expr {
    while let Expr::Paren(paren) = expr {
        expr = &paren.expr;
    }
    expr
}
