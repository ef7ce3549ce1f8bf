//! # bpmdata
//!
//! Typed, name-centralized access to the variables of a process engine.
//!
//! Engine backends store variables untyped, keyed by string. bpmdata lets
//! client code declare each variable once as a [`VariableDescriptor`] that
//! fixes its name and type, then read and write it against whatever backend
//! is at hand.
//!
//! ## Quick Start
//!
//! ```
//! use bpmdata::prelude::*;
//!
//! let order_id = string_variable("orderId");
//! let approved = boolean_variable("approved");
//!
//! let engine = InMemoryEngine::new();
//! let execution = engine.start_process_instance(builder().set(&order_id, "1".into())?.build());
//! let task = engine.create_task(&execution)?;
//!
//! bind_task(&approved, &engine, &task).set(true)?;
//!
//! assert_eq!(bind_execution(&order_id, &engine, &execution).get()?, "1");
//! assert!(bind_execution(&approved, &engine, &execution).get()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Backends
//!
//! - [`VariableMap`] - free-standing map, [`bind_map`] / [`read_map`]
//! - [`VariableScope`] - live execution scope, [`bind_scope`] / [`bind_scope_local`]
//! - [`TaskService`] - running tasks, [`bind_task`] / [`bind_task_local`]
//! - [`RuntimeService`] - process executions, [`bind_execution`] / [`bind_execution_local`]
//! - [`CaseService`] - case executions, [`bind_case`]
//! - [`VariableSnapshot`] - read-only snapshots such as a [`LockedExternalTask`], [`bind_snapshot`]
//!
//! ## Batches
//!
//! [`GlobalScopeReplaceStrategy`] and [`GlobalScopeMergeStrategy`] apply a
//! whole [`VariableMap`] to a scope at once.

#![warn(missing_docs)]

mod error;
mod types;
mod variables;

pub mod prelude;

pub use error::{BackendError, ConversionError, Error, Result};
pub use types::*;
pub use variables::*;

pub use bpmdata_adapters::{
    bind_case, bind_execution, bind_execution_local, bind_map, bind_scope, bind_scope_local,
    bind_snapshot, bind_task, bind_task_local, read_map, CaseExecutionVariableWriter,
    GlobalScopeMergeStrategy, GlobalScopeReplaceStrategy, ProcessExecutionVariableWriter,
    ReadAdapter, UserTaskVariableWriter, ValueApplicationStrategy, VariableAdapter,
    VariableMapBuilder, VariableMapWriter, VariableScopeWriter, WriteAdapter,
};
pub use bpmdata_core::serde_variable;
pub use bpmdata_engine::{
    DelegateExecution, DelegateTask, EngineBuilder, EngineConfig, InMemoryEngine, InMemoryScope,
    LockedExternalTask,
};
pub use bpmdata_mock::{MockTaskService, TaskServiceVariableMockBuilder};
