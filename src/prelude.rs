//! Convenient imports for bpmdata.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use bpmdata::prelude::*;
//!
//! let amount = long_variable("amount");
//! let mut vars = VariableMap::new();
//! bind_map(&amount, &mut vars).set(42)?;
//! # Ok::<(), Error>(())
//! ```

// Error handling
pub use crate::error::{Error, Result};

// Descriptors and constructors
pub use crate::variables::*;
pub use crate::types::{Partition, Value, VariableDescriptor, VariableMap, VariableValue};

// Adapter capabilities and factories
pub use bpmdata_adapters::{
    bind_case, bind_execution, bind_execution_local, bind_map, bind_scope, bind_scope_local,
    bind_snapshot, bind_task, bind_task_local, read_map, ReadAdapter, VariableAdapter,
    WriteAdapter,
};

// Batch application
pub use bpmdata_adapters::{
    GlobalScopeMergeStrategy, GlobalScopeReplaceStrategy, ValueApplicationStrategy,
};

// Backends
pub use crate::types::{CaseService, RuntimeService, TaskService, VariableScope};
pub use bpmdata_engine::{InMemoryEngine, InMemoryScope};
