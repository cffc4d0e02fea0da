//! Semantic analysis module
//!
//! This module performs name resolution: scope tracking and the three-phase
//! check over a program.

mod analyzer;
mod scope;

pub use analyzer::ScopeAnalyzer;
pub use scope::{Scope, ScopeStack, Symbol, SymbolKind};
