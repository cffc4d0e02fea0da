//! Declaration AST nodes

use super::{Expr, Stmt};
use crate::common::Span;

/// Variable declaration: `int x = 5;`
///
/// Used both for globals and, wrapped in [`super::StmtKind::Declaration`],
/// for block-scoped locals. Type tags are uninterpreted strings; the
/// analyzer resolves names, not types.
#[derive(Debug, Clone)]
pub struct VarDecl {
    pub name: String,
    pub ty: String,
    pub init: Option<Expr>,
    pub span: Span,
}

impl VarDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            init: None,
            span,
        }
    }

    pub fn with_init(mut self, init: Expr) -> Self {
        self.init = Some(init);
        self
    }
}

/// Function parameter
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub span: Span,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            span,
        }
    }
}

/// Function declaration or definition
#[derive(Debug, Clone)]
pub struct FuncDecl {
    pub name: String,
    pub return_type: String,
    pub params: Vec<Param>,
    pub body: Option<Stmt>,
    pub span: Span,
}

impl FuncDecl {
    pub fn new(
        name: impl Into<String>,
        return_type: impl Into<String>,
        params: Vec<Param>,
        span: Span,
    ) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            params,
            body: None,
            span,
        }
    }

    pub fn with_body(mut self, body: Stmt) -> Self {
        self.body = Some(body);
        self
    }

    /// Check if this is just a declaration (no body)
    pub fn is_declaration(&self) -> bool {
        self.body.is_none()
    }
}
