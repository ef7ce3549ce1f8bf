//! In-memory process engine for bpmdata
//!
//! The adapters in `bpmdata-adapters` are written against the backend
//! contracts in [`bpmdata_core::contract`]. This crate gives those contracts
//! a concrete, in-process home so they can be exercised without a running
//! workflow engine:
//!
//! - [`InMemoryEngine`]: task, runtime and case services over concurrent maps
//! - [`DelegateExecution`] / [`DelegateTask`]: live scopes bound to the engine
//! - [`InMemoryScope`]: a standalone two-partition scope
//! - [`LockedExternalTask`]: a read-only variable snapshot
//!
//! ```
//! use bpmdata_core::{Partition, RuntimeService, Value, VariableMap};
//! use bpmdata_engine::InMemoryEngine;
//!
//! let engine = InMemoryEngine::new();
//! let execution = engine.start_process_instance(VariableMap::new());
//! engine
//!     .set_execution_variable(&execution, Partition::Global, "orderId", Value::from("1"))
//!     .unwrap();
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod external_task;
mod scope;

pub use config::{EngineBuilder, EngineConfig};
pub use engine::InMemoryEngine;
pub use external_task::LockedExternalTask;
pub use scope::{DelegateExecution, DelegateTask, InMemoryScope};
