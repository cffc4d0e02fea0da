//! Statement AST nodes

use super::{Expr, VarDecl};
use crate::common::Span;

/// Statement node
#[derive(Debug, Clone)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Statement kinds
#[derive(Debug, Clone)]
pub enum StmtKind {
    /// Expression statement: expr;
    Expr(Expr),

    /// Compound statement (block): { ... }
    Block(Vec<Stmt>),

    /// Local variable declaration: int x = 5;
    Declaration(VarDecl),

    /// Assignment: x = value — the target must already be declared
    Assign { name: String, value: Expr },

    /// Return statement: return [expr];
    Return(Option<Expr>),

    /// If statement: if (cond) then [else else]
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    /// While loop: while (cond) body
    While { condition: Expr, body: Box<Stmt> },

    /// For loop: for (init; cond; increment) body
    ///
    /// A variable declared in `init` is scoped to the loop: visible in the
    /// condition, increment, and body, gone once the loop is left.
    For {
        init: Option<Box<Stmt>>,
        condition: Option<Expr>,
        increment: Option<Box<Stmt>>,
        body: Box<Stmt>,
    },
}
