//! Scope analyzer - name resolution over the syntax tree

use super::scope::{ScopeStack, Symbol, SymbolKind};
use crate::ast::*;
use crate::common::{DiagnosticSink, ScopeError};

/// Scope analyzer for a whole program
///
/// Runs a three-phase check: global registration, function bodies, global
/// initializers. No violation aborts the run; every detectable error in the
/// tree is collected in one pass. An instance owns one live scope stack and
/// is good for a single [`ScopeAnalyzer::check`] call — construct a fresh
/// analyzer per run.
pub struct ScopeAnalyzer {
    scopes: ScopeStack,
    errors: Vec<ScopeError>,
    sink: Option<Box<dyn DiagnosticSink>>,
}

impl ScopeAnalyzer {
    pub fn new() -> Self {
        Self {
            scopes: ScopeStack::new(),
            errors: Vec::new(),
            sink: None,
        }
    }

    /// Analyzer that forwards each violation to `sink` as it is recorded
    pub fn with_sink(sink: Box<dyn DiagnosticSink>) -> Self {
        Self {
            scopes: ScopeStack::new(),
            errors: Vec::new(),
            sink: Some(sink),
        }
    }

    /// Check a whole program; true iff no scope violations were found
    pub fn check(&mut self, program: &Program) -> bool {
        // Phase 1: register all top-level names into the global scope, so
        // declaration order is irrelevant for resolution
        for var in &program.globals {
            if !self.scopes.define_global(Symbol::variable(&var.name, &var.ty)) {
                self.error(ScopeError::variable_redefined(&var.name, var.span));
            }
        }
        for func in &program.functions {
            if !self
                .scopes
                .define_global(Symbol::function(&func.name, &func.return_type))
            {
                self.error(ScopeError::function_redefined(&func.name, func.span));
            }
        }

        // Phase 2: function bodies, independent of each other
        for func in &program.functions {
            self.check_function(func);
        }

        // Phase 3: global initializers, against the global scope only
        for var in &program.globals {
            if let Some(init) = &var.init {
                self.check_expr(init);
            }
        }

        self.errors.is_empty()
    }

    /// Violations in discovery order
    pub fn errors(&self) -> &[ScopeError] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, error: ScopeError) {
        if let Some(sink) = &mut self.sink {
            sink.report(&error);
        }
        self.errors.push(error);
    }

    fn check_function(&mut self, func: &FuncDecl) {
        self.scopes.push();

        // Parameters shadow globals without error; only a collision with
        // another parameter of the same function is a redefinition
        for param in &func.params {
            if !self.scopes.define(Symbol::parameter(&param.name, &param.ty)) {
                self.error(ScopeError::variable_redefined(&param.name, param.span));
            }
        }

        if let Some(body) = &func.body {
            self.check_stmt(body);
        }

        self.scopes.pop();
    }

    fn check_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Expr(expr) => {
                self.check_expr(expr);
            }
            StmtKind::Block(stmts) => {
                self.scopes.push();
                for stmt in stmts {
                    self.check_stmt(stmt);
                }
                self.scopes.pop();
            }
            StmtKind::Declaration(var) => {
                self.check_var_decl(var);
            }
            StmtKind::Assign { name, value } => {
                // Assignment never declares; the value is checked first,
                // then the target is resolved against the full chain
                self.check_expr(value);
                if self.scopes.lookup(name).is_none() {
                    self.error(ScopeError::undeclared_variable(name, stmt.span));
                }
            }
            StmtKind::Return(expr) => {
                if let Some(expr) = expr {
                    self.check_expr(expr);
                }
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.check_expr(condition);
                self.check_stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.check_stmt(else_branch);
                }
            }
            StmtKind::While { condition, body } => {
                self.check_expr(condition);
                self.check_stmt(body);
            }
            StmtKind::For {
                init,
                condition,
                increment,
                body,
            } => {
                self.scopes.push();

                if let Some(init) = init {
                    self.check_stmt(init);
                }
                if let Some(condition) = condition {
                    self.check_expr(condition);
                }
                if let Some(increment) = increment {
                    self.check_stmt(increment);
                }
                self.check_stmt(body);

                self.scopes.pop();
            }
        }
    }

    fn check_var_decl(&mut self, var: &VarDecl) {
        // On a redefinition the existing binding stays in effect
        if !self.scopes.define(Symbol::variable(&var.name, &var.ty)) {
            self.error(ScopeError::variable_redefined(&var.name, var.span));
        }

        // The initializer is checked after the declaration attempt, so the
        // declared name is visible inside its own initializer
        if let Some(init) = &var.init {
            self.check_expr(init);
        }
    }

    fn check_expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Literal { .. } => {}
            ExprKind::Name(name) => {
                if self.scopes.lookup(name).is_none() {
                    self.error(ScopeError::undeclared_variable(name, expr.span));
                }
            }
            ExprKind::Binary { left, right, .. } => {
                self.check_expr(left);
                self.check_expr(right);
            }
            ExprKind::Call { name, args } => {
                // Calls resolve against the global scope only; there are no
                // local function declarations and no function values
                match self.scopes.lookup_global(name) {
                    Some(symbol) if symbol.kind == SymbolKind::Function => {}
                    _ => self.error(ScopeError::undefined_function(name, expr.span)),
                }
                for arg in args {
                    self.check_expr(arg);
                }
            }
        }
    }
}

impl Default for ScopeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
