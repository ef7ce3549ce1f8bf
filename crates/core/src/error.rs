//! Error types for typed variable access
//!
//! Three layers, innermost first:
//!
//! - [`BackendError`]: a backend refused or failed an operation
//! - [`ConversionError`]: a stored value has the wrong shape for the target type
//! - [`VariableError`]: what adapters return, tagging either of the above
//!   with the variable name and the backend kind

use crate::types::BackendKind;
use thiserror::Error;

/// Failure reported by a backend store
///
/// Adapters never inspect or retry these; they pass them through inside
/// [`VariableError::Backend`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// No task with this id exists
    #[error("task not found: {0}")]
    TaskNotFound(String),

    /// No process execution with this id exists
    #[error("execution not found: {0}")]
    ExecutionNotFound(String),

    /// No case execution with this id exists
    #[error("case execution not found: {0}")]
    CaseExecutionNotFound(String),

    /// The variable was never declared on a fake backend
    #[error("variable '{0}' was not defined on this backend")]
    UndefinedVariable(String),

    /// The backend could not be reached
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The caller is not allowed to touch this entity
    #[error("access denied: {0}")]
    AccessDenied(String),
}

/// A stored value could not be converted to the requested type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, got {actual}")]
pub struct ConversionError {
    /// Rust type the caller asked for
    pub expected: &'static str,
    /// What was actually stored (a `Value` type name, or a detail message)
    pub actual: String,
}

impl ConversionError {
    /// Create a conversion error
    pub fn new(expected: &'static str, actual: impl Into<String>) -> Self {
        Self {
            expected,
            actual: actual.into(),
        }
    }
}

/// Error returned by every adapter operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariableError {
    /// A non-nullable variable has no entry in the bound backend
    #[error("variable '{name}' not found in {backend}")]
    MissingVariable {
        /// Variable name
        name: String,
        /// Backend the read was bound to
        backend: BackendKind,
    },

    /// An entry exists but cannot be converted to the descriptor's type
    #[error("variable '{name}' in {backend} has wrong type: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Variable name
        name: String,
        /// Backend the read was bound to
        backend: BackendKind,
        /// Rust type of the descriptor
        expected: &'static str,
        /// What the backend held
        actual: String,
    },

    /// The backend itself failed
    #[error("{backend} failed for variable '{name}': {source}")]
    Backend {
        /// Variable name
        name: String,
        /// Backend the operation was bound to
        backend: BackendKind,
        /// Unmodified backend error
        #[source]
        source: BackendError,
    },
}

impl VariableError {
    /// Build a `MissingVariable` error
    pub fn missing(name: impl Into<String>, backend: BackendKind) -> Self {
        VariableError::MissingVariable {
            name: name.into(),
            backend,
        }
    }

    /// Build a `TypeMismatch` error from a conversion failure
    pub fn mismatch(name: impl Into<String>, backend: BackendKind, err: ConversionError) -> Self {
        VariableError::TypeMismatch {
            name: name.into(),
            backend,
            expected: err.expected,
            actual: err.actual,
        }
    }

    /// Tag a backend error with the variable it was raised for
    pub fn backend(name: impl Into<String>, backend: BackendKind, source: BackendError) -> Self {
        VariableError::Backend {
            name: name.into(),
            backend,
            source,
        }
    }

    /// Name of the variable involved
    pub fn variable_name(&self) -> &str {
        match self {
            VariableError::MissingVariable { name, .. }
            | VariableError::TypeMismatch { name, .. }
            | VariableError::Backend { name, .. } => name,
        }
    }

    /// Kind of backend the failing adapter was bound to
    pub fn backend_kind(&self) -> BackendKind {
        match self {
            VariableError::MissingVariable { backend, .. }
            | VariableError::TypeMismatch { backend, .. }
            | VariableError::Backend { backend, .. } => *backend,
        }
    }

    /// Check if this is a missing-variable error
    pub fn is_missing(&self) -> bool {
        matches!(self, VariableError::MissingVariable { .. })
    }

    /// Check if this is a type-mismatch error
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, VariableError::TypeMismatch { .. })
    }

    /// Check if this error came from the backend
    pub fn is_backend(&self) -> bool {
        matches!(self, VariableError::Backend { .. })
    }
}

/// Result type for adapter operations
pub type Result<T> = std::result::Result<T, VariableError>;
