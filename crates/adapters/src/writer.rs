//! Fluent multi-variable writers
//!
//! Each writer is bound to one backend and sets several typed variables
//! in a chain:
//!
//! ```
//! use bpmdata_adapters::VariableMapWriter;
//! use bpmdata_core::{VariableDescriptor, VariableMap};
//!
//! let order_id = VariableDescriptor::<String>::new("orderId");
//! let approved = VariableDescriptor::<bool>::new("approved");
//! let mut vars = VariableMap::new();
//!
//! VariableMapWriter::new(&mut vars)
//!     .set(&order_id, "1".to_string())?
//!     .set(&approved, false)?;
//! assert_eq!(vars.len(), 2);
//! # Ok::<(), bpmdata_core::VariableError>(())
//! ```
//!
//! Writers over a backend with a local partition also offer `set_local`,
//! `remove_local` and `variables_local`.

use crate::adapter::WriteAdapter;
use crate::case::bind_case;
use crate::map::bind_map;
use crate::runtime::{bind_execution, bind_execution_local};
use crate::scope::{bind_scope, bind_scope_local};
use crate::task::{bind_task, bind_task_local};
use bpmdata_core::{
    BackendError, BackendKind, CaseService, Partition, Result, RuntimeService, TaskService,
    VariableDescriptor, VariableError, VariableMap, VariableScope, VariableValue,
};

/// Snapshots cover every variable, so errors are tagged with this name
const ALL_VARIABLES: &str = "*";

fn snapshot_error(backend: BackendKind) -> impl FnOnce(BackendError) -> VariableError {
    move |e| VariableError::backend(ALL_VARIABLES, backend, e)
}

// =============================================================================
// VariableMap
// =============================================================================

/// Writer over a free-standing map
#[derive(Debug)]
pub struct VariableMapWriter<'a> {
    map: &'a mut VariableMap,
}

impl<'a> VariableMapWriter<'a> {
    /// Bind a writer to `map`
    pub fn new(map: &'a mut VariableMap) -> Self {
        Self { map }
    }

    /// Set `descriptor` to `value`
    pub fn set<T: VariableValue>(self, descriptor: &VariableDescriptor<T>, value: T) -> Result<Self> {
        bind_map(descriptor, &mut *self.map).set(value)?;
        Ok(self)
    }

    /// Remove `descriptor`
    pub fn remove<T: VariableValue>(self, descriptor: &VariableDescriptor<T>) -> Result<Self> {
        bind_map(descriptor, &mut *self.map).remove()?;
        Ok(self)
    }

    /// Copy of the map as written so far
    pub fn variables(&self) -> VariableMap {
        self.map.clone()
    }
}

// =============================================================================
// VariableScope
// =============================================================================

/// Writer over a live two-partition scope
pub struct VariableScopeWriter<'a, S: VariableScope + ?Sized> {
    scope: &'a mut S,
}

impl<'a, S: VariableScope + ?Sized> VariableScopeWriter<'a, S> {
    /// Bind a writer to `scope`
    pub fn new(scope: &'a mut S) -> Self {
        Self { scope }
    }

    /// Set a global variable
    pub fn set<T: VariableValue>(self, descriptor: &VariableDescriptor<T>, value: T) -> Result<Self> {
        bind_scope(descriptor, &mut *self.scope).set(value)?;
        Ok(self)
    }

    /// Set a local variable
    pub fn set_local<T: VariableValue>(
        self,
        descriptor: &VariableDescriptor<T>,
        value: T,
    ) -> Result<Self> {
        bind_scope_local(descriptor, &mut *self.scope).set(value)?;
        Ok(self)
    }

    /// Remove a global variable
    pub fn remove<T: VariableValue>(self, descriptor: &VariableDescriptor<T>) -> Result<Self> {
        bind_scope(descriptor, &mut *self.scope).remove()?;
        Ok(self)
    }

    /// Remove a local variable
    pub fn remove_local<T: VariableValue>(self, descriptor: &VariableDescriptor<T>) -> Result<Self> {
        bind_scope_local(descriptor, &mut *self.scope).remove()?;
        Ok(self)
    }

    /// Copy of the global partition
    pub fn variables(&self) -> Result<VariableMap> {
        self.scope
            .variables(Partition::Global)
            .map_err(snapshot_error(BackendKind::VariableScope))
    }

    /// Copy of the local partition
    pub fn variables_local(&self) -> Result<VariableMap> {
        self.scope
            .variables(Partition::Local)
            .map_err(snapshot_error(BackendKind::VariableScope))
    }
}

// =============================================================================
// RuntimeService
// =============================================================================

/// Writer over one process execution of a runtime service
pub struct ProcessExecutionVariableWriter<'a, S: RuntimeService + ?Sized> {
    service: &'a S,
    execution_id: String,
}

impl<'a, S: RuntimeService + ?Sized> ProcessExecutionVariableWriter<'a, S> {
    /// Bind a writer to `execution_id`
    pub fn new(service: &'a S, execution_id: impl Into<String>) -> Self {
        Self {
            service,
            execution_id: execution_id.into(),
        }
    }

    /// Set a process variable
    pub fn set<T: VariableValue>(self, descriptor: &VariableDescriptor<T>, value: T) -> Result<Self> {
        bind_execution(descriptor, self.service, self.execution_id.as_str()).set(value)?;
        Ok(self)
    }

    /// Set an execution-local variable
    pub fn set_local<T: VariableValue>(
        self,
        descriptor: &VariableDescriptor<T>,
        value: T,
    ) -> Result<Self> {
        bind_execution_local(descriptor, self.service, self.execution_id.as_str()).set(value)?;
        Ok(self)
    }

    /// Remove a process variable
    pub fn remove<T: VariableValue>(self, descriptor: &VariableDescriptor<T>) -> Result<Self> {
        bind_execution(descriptor, self.service, self.execution_id.as_str()).remove()?;
        Ok(self)
    }

    /// Remove an execution-local variable
    pub fn remove_local<T: VariableValue>(self, descriptor: &VariableDescriptor<T>) -> Result<Self> {
        bind_execution_local(descriptor, self.service, self.execution_id.as_str()).remove()?;
        Ok(self)
    }

    /// Copy of the process variables
    pub fn variables(&self) -> Result<VariableMap> {
        self.service
            .execution_variables(&self.execution_id, Partition::Global)
            .map_err(snapshot_error(BackendKind::RuntimeService))
    }

    /// Copy of the execution-local variables
    pub fn variables_local(&self) -> Result<VariableMap> {
        self.service
            .execution_variables(&self.execution_id, Partition::Local)
            .map_err(snapshot_error(BackendKind::RuntimeService))
    }
}

// =============================================================================
// TaskService
// =============================================================================

/// Writer over one user task of a task service
#[derive(Debug)]
pub struct UserTaskVariableWriter<'a, S: TaskService + ?Sized> {
    service: &'a S,
    task_id: String,
}

impl<'a, S: TaskService + ?Sized> UserTaskVariableWriter<'a, S> {
    /// Bind a writer to `task_id`
    pub fn new(service: &'a S, task_id: impl Into<String>) -> Self {
        Self {
            service,
            task_id: task_id.into(),
        }
    }

    /// Set a variable visible to the task
    pub fn set<T: VariableValue>(self, descriptor: &VariableDescriptor<T>, value: T) -> Result<Self> {
        bind_task(descriptor, self.service, self.task_id.as_str()).set(value)?;
        Ok(self)
    }

    /// Set a task-local variable
    pub fn set_local<T: VariableValue>(
        self,
        descriptor: &VariableDescriptor<T>,
        value: T,
    ) -> Result<Self> {
        bind_task_local(descriptor, self.service, self.task_id.as_str()).set(value)?;
        Ok(self)
    }

    /// Remove a variable visible to the task
    pub fn remove<T: VariableValue>(self, descriptor: &VariableDescriptor<T>) -> Result<Self> {
        bind_task(descriptor, self.service, self.task_id.as_str()).remove()?;
        Ok(self)
    }

    /// Remove a task-local variable
    pub fn remove_local<T: VariableValue>(self, descriptor: &VariableDescriptor<T>) -> Result<Self> {
        bind_task_local(descriptor, self.service, self.task_id.as_str()).remove()?;
        Ok(self)
    }

    /// Copy of the variables visible to the task
    pub fn variables(&self) -> Result<VariableMap> {
        self.service
            .task_variables(&self.task_id, Partition::Global)
            .map_err(snapshot_error(BackendKind::TaskService))
    }

    /// Copy of the task-local variables
    pub fn variables_local(&self) -> Result<VariableMap> {
        self.service
            .task_variables(&self.task_id, Partition::Local)
            .map_err(snapshot_error(BackendKind::TaskService))
    }
}

// =============================================================================
// CaseService
// =============================================================================

/// Writer over one case execution of a case service
pub struct CaseExecutionVariableWriter<'a, S: CaseService + ?Sized> {
    service: &'a S,
    case_execution_id: String,
}

impl<'a, S: CaseService + ?Sized> CaseExecutionVariableWriter<'a, S> {
    /// Bind a writer to `case_execution_id`
    pub fn new(service: &'a S, case_execution_id: impl Into<String>) -> Self {
        Self {
            service,
            case_execution_id: case_execution_id.into(),
        }
    }

    /// Set a case variable
    pub fn set<T: VariableValue>(self, descriptor: &VariableDescriptor<T>, value: T) -> Result<Self> {
        bind_case(descriptor, self.service, self.case_execution_id.as_str()).set(value)?;
        Ok(self)
    }

    /// Remove a case variable
    pub fn remove<T: VariableValue>(self, descriptor: &VariableDescriptor<T>) -> Result<Self> {
        bind_case(descriptor, self.service, self.case_execution_id.as_str()).remove()?;
        Ok(self)
    }

    /// Copy of the case variables
    pub fn variables(&self) -> Result<VariableMap> {
        self.service
            .case_variables(&self.case_execution_id)
            .map_err(snapshot_error(BackendKind::CaseService))
    }
}
