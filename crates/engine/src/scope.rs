//! Live variable scopes
//!
//! - [`InMemoryScope`]: a free-standing two-partition scope, owning its maps
//! - [`DelegateExecution`] / [`DelegateTask`]: views onto one execution or
//!   task of an [`InMemoryEngine`], writing through to it

use crate::engine::InMemoryEngine;
use bpmdata_core::{
    BackendError, Partition, RuntimeService, TaskService, Value, VariableMap, VariableScope,
};

/// Two-partition scope held entirely in memory
///
/// Writing `Value::Null` removes the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryScope {
    global: VariableMap,
    local: VariableMap,
}

impl InMemoryScope {
    /// Create an empty scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scope whose global partition starts as `variables`
    pub fn with_globals(variables: VariableMap) -> Self {
        Self {
            global: variables,
            local: VariableMap::new(),
        }
    }

    /// Global partition
    pub fn global(&self) -> &VariableMap {
        &self.global
    }

    /// Local partition
    pub fn local(&self) -> &VariableMap {
        &self.local
    }

    fn partition(&self, partition: Partition) -> &VariableMap {
        match partition {
            Partition::Global => &self.global,
            Partition::Local => &self.local,
        }
    }

    fn partition_mut(&mut self, partition: Partition) -> &mut VariableMap {
        match partition {
            Partition::Global => &mut self.global,
            Partition::Local => &mut self.local,
        }
    }
}

impl VariableScope for InMemoryScope {
    fn variable(&self, partition: Partition, name: &str) -> Result<Option<Value>, BackendError> {
        Ok(self.partition(partition).get(name).cloned())
    }

    fn set_variable(
        &mut self,
        partition: Partition,
        name: &str,
        value: Value,
    ) -> Result<(), BackendError> {
        crate::engine::store(self.partition_mut(partition), name, value, true);
        Ok(())
    }

    fn remove_variable(&mut self, partition: Partition, name: &str) -> Result<(), BackendError> {
        self.partition_mut(partition).remove(name);
        Ok(())
    }

    fn has_variable(&self, partition: Partition, name: &str) -> Result<bool, BackendError> {
        Ok(self.partition(partition).contains(name))
    }

    fn variables(&self, partition: Partition) -> Result<VariableMap, BackendError> {
        Ok(self.partition(partition).clone())
    }
}

/// Scope of one running execution of an [`InMemoryEngine`]
#[derive(Debug, Clone)]
pub struct DelegateExecution<'e> {
    engine: &'e InMemoryEngine,
    execution_id: String,
}

impl<'e> DelegateExecution<'e> {
    pub(crate) fn new(engine: &'e InMemoryEngine, execution_id: &str) -> Self {
        Self {
            engine,
            execution_id: execution_id.to_string(),
        }
    }

    /// Id of the execution
    pub fn id(&self) -> &str {
        &self.execution_id
    }
}

impl VariableScope for DelegateExecution<'_> {
    fn variable(&self, partition: Partition, name: &str) -> Result<Option<Value>, BackendError> {
        self.engine
            .execution_variable(&self.execution_id, partition, name)
    }

    fn set_variable(
        &mut self,
        partition: Partition,
        name: &str,
        value: Value,
    ) -> Result<(), BackendError> {
        self.engine
            .set_execution_variable(&self.execution_id, partition, name, value)
    }

    fn remove_variable(&mut self, partition: Partition, name: &str) -> Result<(), BackendError> {
        self.engine
            .remove_execution_variable(&self.execution_id, partition, name)
    }

    fn variables(&self, partition: Partition) -> Result<VariableMap, BackendError> {
        self.engine.execution_variables(&self.execution_id, partition)
    }
}

/// Scope of one open task of an [`InMemoryEngine`]
#[derive(Debug, Clone)]
pub struct DelegateTask<'e> {
    engine: &'e InMemoryEngine,
    task_id: String,
}

impl<'e> DelegateTask<'e> {
    pub(crate) fn new(engine: &'e InMemoryEngine, task_id: &str) -> Self {
        Self {
            engine,
            task_id: task_id.to_string(),
        }
    }

    /// Id of the task
    pub fn id(&self) -> &str {
        &self.task_id
    }
}

impl VariableScope for DelegateTask<'_> {
    fn variable(&self, partition: Partition, name: &str) -> Result<Option<Value>, BackendError> {
        self.engine.task_variable(&self.task_id, partition, name)
    }

    fn set_variable(
        &mut self,
        partition: Partition,
        name: &str,
        value: Value,
    ) -> Result<(), BackendError> {
        self.engine
            .set_task_variable(&self.task_id, partition, name, value)
    }

    fn remove_variable(&mut self, partition: Partition, name: &str) -> Result<(), BackendError> {
        self.engine
            .remove_task_variable(&self.task_id, partition, name)
    }

    fn variables(&self, partition: Partition) -> Result<VariableMap, BackendError> {
        self.engine.task_variables(&self.task_id, partition)
    }
}
