//! scopec - lexical-scope analyzer for a small C-like language
//!
//! This library checks an already-built syntax tree for scope correctness:
//! every referenced variable and called function must be declared in a
//! visible scope, no name may be declared twice in the same lexical scope,
//! and shadowing across nested scopes is permitted.
//!
//! ## Architecture
//!
//! The crate is organized into:
//! - **AST** (`ast/`): the closed set of tree nodes the analyzer consumes
//! - **Sema** (`sema/`): scope-chain management and the three-phase analyzer
//! - **Common** (`common/`): shared infrastructure (spans, errors, diagnostics)
//!
//! Analysis never parses: callers assemble the tree and hand it to
//! [`ScopeAnalyzer::check`], then read the pass flag and the ordered list of
//! violations back.

pub mod ast;
pub mod common;
pub mod sema;

// Re-exports for convenience
pub use common::{DiagnosticReporter, DiagnosticSink, ScopeError, Span};
pub use sema::{ScopeAnalyzer, ScopeStack, Symbol, SymbolKind};
