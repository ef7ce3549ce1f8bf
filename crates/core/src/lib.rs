//! Core types for bpmdata
//!
//! This crate defines the canonical semantic types every other crate builds on:
//!
//! - [`Value`] and [`VariableMap`]: the untyped store representation
//! - [`VariableDescriptor`]: the typed, named handle client code holds on to
//! - [`VariableValue`]: conversion between [`Value`] and Rust types
//! - [`contract`]: the backend traits adapters are written against
//! - [`VariableError`]: what adapter operations fail with

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod convert;
pub mod descriptor;
pub mod error;
pub mod types;
pub mod value;

pub use contract::{CaseService, RuntimeService, TaskService, VariableScope, VariableSnapshot};
pub use convert::{Bytes, VariableValue};
pub use descriptor::{DescriptorKey, TypeTag, VariableDescriptor};
pub use error::{BackendError, ConversionError, Result, VariableError};
pub use types::{BackendKind, Partition, VariableMap};
pub use value::Value;
