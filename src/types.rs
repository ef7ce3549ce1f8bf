//! Public types for the bpmdata API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Value model
pub use bpmdata_core::{Bytes, Value, VariableMap, VariableValue};

// Descriptors
pub use bpmdata_core::{DescriptorKey, TypeTag, VariableDescriptor};

// Backend contracts
pub use bpmdata_core::{
    BackendKind, CaseService, Partition, RuntimeService, TaskService, VariableScope,
    VariableSnapshot,
};
