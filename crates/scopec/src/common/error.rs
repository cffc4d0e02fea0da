//! Scope violation records and diagnostic reporting

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use thiserror::Error;

use super::Span;

/// A scope violation detected during analysis
///
/// Every variant carries the offending name. No violation is fatal: the
/// analyzer records the violation and keeps traversing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    #[error("undeclared variable '{name}'")]
    UndeclaredVariable { name: String, span: Span },

    #[error("undefined function '{name}'")]
    UndefinedFunction { name: String, span: Span },

    #[error("variable '{name}' redefined in the same scope")]
    VariableRedefined { name: String, span: Span },

    #[error("function '{name}' redefined")]
    FunctionRedefined { name: String, span: Span },
}

impl ScopeError {
    pub fn undeclared_variable(name: impl Into<String>, span: Span) -> Self {
        Self::UndeclaredVariable {
            name: name.into(),
            span,
        }
    }

    pub fn undefined_function(name: impl Into<String>, span: Span) -> Self {
        Self::UndefinedFunction {
            name: name.into(),
            span,
        }
    }

    pub fn variable_redefined(name: impl Into<String>, span: Span) -> Self {
        Self::VariableRedefined {
            name: name.into(),
            span,
        }
    }

    pub fn function_redefined(name: impl Into<String>, span: Span) -> Self {
        Self::FunctionRedefined {
            name: name.into(),
            span,
        }
    }

    /// The offending name
    pub fn name(&self) -> &str {
        match self {
            Self::UndeclaredVariable { name, .. }
            | Self::UndefinedFunction { name, .. }
            | Self::VariableRedefined { name, .. }
            | Self::FunctionRedefined { name, .. } => name,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::UndeclaredVariable { span, .. }
            | Self::UndefinedFunction { span, .. }
            | Self::VariableRedefined { span, .. }
            | Self::FunctionRedefined { span, .. } => *span,
        }
    }
}

/// Receives each scope violation at the moment it is recorded
///
/// The analyzer keeps the structured records itself; a sink only decides how
/// (and whether) violations are rendered as they are found.
pub trait DiagnosticSink {
    fn report(&mut self, error: &ScopeError);
}

/// Diagnostic reporter for pretty error output
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    file_id: Option<usize>,
    writer: StandardStream,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            file_id: None,
            writer: StandardStream::stderr(ColorChoice::Auto),
            config: term::Config::default(),
        }
    }

    /// Register the source text that error spans refer to
    ///
    /// Violations with a non-default span are then rendered with a label
    /// into this source; without a registered file every violation is a
    /// one-line message.
    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        let file_id = self.files.add(name.into(), source.into());
        self.file_id = Some(file_id);
        file_id
    }
}

impl DiagnosticSink for DiagnosticReporter {
    fn report(&mut self, error: &ScopeError) {
        let mut diagnostic = Diagnostic::error().with_message(error.to_string());

        if let Some(file_id) = self.file_id {
            let span = error.span();
            if span != Span::default() {
                diagnostic =
                    diagnostic.with_labels(vec![Label::primary(file_id, span.start..span.end)]);
            }
        }

        let _ = term::emit(&mut self.writer.lock(), &self.config, &self.files, &diagnostic);
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}
