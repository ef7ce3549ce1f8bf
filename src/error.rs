//! Error types for bpmdata.
//!
//! Every adapter operation fails with [`Error`], which names the variable
//! and the kind of backend involved. Backend failures keep the underlying
//! [`BackendError`] as their source.

pub use bpmdata_core::{BackendError, ConversionError};

/// All bpmdata errors.
///
/// See [`bpmdata_core::VariableError`] for the variants and the
/// `is_missing` / `is_type_mismatch` / `is_backend` predicates.
pub type Error = bpmdata_core::VariableError;

/// Result type for bpmdata operations.
pub type Result<T> = std::result::Result<T, Error>;
