//! Typed variable access for bpmdata
//!
//! A [`VariableDescriptor`](bpmdata_core::VariableDescriptor) names a
//! variable and fixes its type. Binding it to a backend yields an adapter:
//!
//! | Backend | Bind with | Capabilities |
//! |---------|-----------|--------------|
//! | `&mut VariableMap` | [`bind_map`] | read, write |
//! | `&VariableMap` | [`read_map`] | read |
//! | `&mut impl VariableScope` | [`bind_scope`], [`bind_scope_local`] | read, write |
//! | `&impl TaskService` + task id | [`bind_task`], [`bind_task_local`] | read, write |
//! | `&impl RuntimeService` + execution id | [`bind_execution`], [`bind_execution_local`] | read, write |
//! | `&impl CaseService` + case execution id | [`bind_case`] | read, write |
//! | `&impl VariableSnapshot` | [`bind_snapshot`] | read |
//!
//! Binding is free; nothing touches the backend until `get`/`set` is called.
//! Read and write behaviour is shared through [`ReadAdapter`] and
//! [`WriteAdapter`].
//!
//! Batches of variables go through a [`ValueApplicationStrategy`], and
//! [`VariableMapBuilder`] plus the writers in [`writer`] give fluent
//! multi-variable construction.

#![warn(missing_docs)]

pub mod adapter;
pub mod apply;
pub mod builder;
pub mod case;
pub mod external_task;
pub mod map;
pub mod runtime;
pub mod scope;
pub mod task;
pub mod writer;

pub use adapter::{ReadAdapter, VariableAdapter, WriteAdapter};
pub use apply::{GlobalScopeMergeStrategy, GlobalScopeReplaceStrategy, ValueApplicationStrategy};
pub use builder::VariableMapBuilder;
pub use case::{bind_case, CaseServiceAdapter};
pub use external_task::{bind_snapshot, ExternalTaskReader};
pub use map::{bind_map, read_map, VariableMapAdapter, VariableMapReader};
pub use runtime::{bind_execution, bind_execution_local, RuntimeServiceAdapter};
pub use scope::{bind_scope, bind_scope_local, VariableScopeAdapter};
pub use task::{bind_task, bind_task_local, TaskServiceAdapter};
pub use writer::{
    CaseExecutionVariableWriter, ProcessExecutionVariableWriter, UserTaskVariableWriter,
    VariableMapWriter, VariableScopeWriter,
};
