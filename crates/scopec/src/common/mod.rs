//! Common infrastructure shared across the analyzer and its callers

mod error;
mod span;

pub use error::{DiagnosticReporter, DiagnosticSink, ScopeError};
pub use span::Span;
