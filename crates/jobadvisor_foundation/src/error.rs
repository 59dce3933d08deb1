//! Error types for the job advisor.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Two families reach callers: validation errors, raised before the engine
//! runs, and engine errors, raised when a run cannot reach quiescence.

use std::fmt;

use thiserror::Error;

use crate::types::Type;

/// The main error type for job advisor operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a type mismatch error for a record field.
    #[must_use]
    pub fn type_mismatch(field: impl Into<String>, expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        })
    }

    /// Creates an unknown field error.
    #[must_use]
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownField(field.into()))
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidValue {
            field: field.into(),
            message: message.into(),
        })
    }

    /// Creates an unbound variable error.
    #[must_use]
    pub fn unbound_variable(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnboundVariable(name.into()))
    }

    /// Creates a semantic limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(limit: SemanticLimit) -> Self {
        Self::new(ErrorKind::LimitExceeded(limit))
    }

    /// Returns true if this error rejected the input before any rule ran.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::TypeMismatch { .. }
                | ErrorKind::UnknownField(_)
                | ErrorKind::InvalidValue { .. }
        )
    }

    /// Returns the reason trace accumulated before the failure, if any.
    #[must_use]
    pub fn partial_trace(&self) -> &[String] {
        match &self.context {
            Some(ctx) => &ctx.trace,
            None => &[],
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A record field holds a value of the wrong type.
    #[error("type mismatch for field {field}: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The field that was checked.
        field: String,
        /// The expected type.
        expected: Type,
        /// The actual type encountered.
        actual: Type,
    },

    /// A record names a field the profile does not have.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A record field has the right type but an unusable value.
    #[error("invalid value for field {field}: {message}")]
    InvalidValue {
        /// The field that was checked.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A rule action read a variable its patterns never bound.
    #[error("unbound variable: ?{0}")]
    UnboundVariable(String),

    /// Semantic limit exceeded (kill switch triggered).
    #[error("limit exceeded: {0}")]
    LimitExceeded(SemanticLimit),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Semantic limits (kill switches) that can be exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticLimit {
    /// Maximum rule activations per run exceeded.
    MaxActivations {
        /// The configured limit.
        limit: usize,
        /// Additional context about which rule(s) caused the issue.
        context: Option<String>,
    },
}

impl fmt::Display for SemanticLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxActivations { limit, context } => {
                write!(f, "max activations ({limit}) exceeded")?;
                if let Some(ctx) = context {
                    write!(f, ": {ctx}")?;
                }
                Ok(())
            }
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Rule or operation that was executing.
    pub source: Option<String>,
    /// Reason trace accumulated before the failure.
    pub trace: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attaches the reason trace accumulated so far.
    #[must_use]
    pub fn with_trace(mut self, trace: Vec<String>) -> Self {
        self.trace = trace;
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.trace.is_empty() {
            writeln!(f)?;
            for line in &self.trace {
                writeln!(f, "  after {line}")?;
            }
        }
        Ok(())
    }
}
