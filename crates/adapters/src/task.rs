//! Adapter over a [`TaskService`]

use crate::adapter::{ReadAdapter, VariableAdapter, WriteAdapter};
use bpmdata_core::{
    BackendKind, Partition, Result, TaskService, Value, VariableDescriptor, VariableError,
    VariableValue,
};

/// Descriptor bound to a task id on a task service
pub struct TaskServiceAdapter<'a, T, S: TaskService + ?Sized> {
    descriptor: &'a VariableDescriptor<T>,
    service: &'a S,
    task_id: String,
    partition: Partition,
}

/// Bind `descriptor` to the variables visible to task `task_id`
pub fn bind_task<'a, T: VariableValue, S: TaskService + ?Sized>(
    descriptor: &'a VariableDescriptor<T>,
    service: &'a S,
    task_id: impl Into<String>,
) -> TaskServiceAdapter<'a, T, S> {
    TaskServiceAdapter {
        descriptor,
        service,
        task_id: task_id.into(),
        partition: Partition::Global,
    }
}

/// Bind `descriptor` to the task-local variables of task `task_id`
pub fn bind_task_local<'a, T: VariableValue, S: TaskService + ?Sized>(
    descriptor: &'a VariableDescriptor<T>,
    service: &'a S,
    task_id: impl Into<String>,
) -> TaskServiceAdapter<'a, T, S> {
    TaskServiceAdapter {
        descriptor,
        service,
        task_id: task_id.into(),
        partition: Partition::Local,
    }
}

impl<T, S: TaskService + ?Sized> TaskServiceAdapter<'_, T, S> {
    /// Bound task id
    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    /// Partition reads and writes go to
    pub fn partition(&self) -> Partition {
        self.partition
    }

    fn tag(&self, err: bpmdata_core::BackendError) -> VariableError {
        VariableError::backend(self.descriptor.name(), BackendKind::TaskService, err)
    }
}

impl<T, S: TaskService + ?Sized> std::fmt::Debug for TaskServiceAdapter<'_, T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskServiceAdapter")
            .field("variable", &self.descriptor.name())
            .field("task_id", &self.task_id)
            .field("partition", &self.partition)
            .finish_non_exhaustive()
    }
}

impl<T: VariableValue, S: TaskService + ?Sized> VariableAdapter<T> for TaskServiceAdapter<'_, T, S> {
    fn descriptor(&self) -> &VariableDescriptor<T> {
        self.descriptor
    }

    fn backend_kind(&self) -> BackendKind {
        BackendKind::TaskService
    }
}

impl<T: VariableValue, S: TaskService + ?Sized> ReadAdapter<T> for TaskServiceAdapter<'_, T, S> {
    fn read_value(&self) -> Result<Option<Value>> {
        self.service
            .task_variable(&self.task_id, self.partition, self.descriptor.name())
            .map_err(|e| self.tag(e))
    }
}

impl<T: VariableValue, S: TaskService + ?Sized> WriteAdapter<T> for TaskServiceAdapter<'_, T, S> {
    fn write_value(&mut self, value: Value) -> Result<()> {
        self.service
            .set_task_variable(&self.task_id, self.partition, self.descriptor.name(), value)
            .map_err(|e| self.tag(e))
    }

    fn delete_value(&mut self) -> Result<()> {
        self.service
            .remove_task_variable(&self.task_id, self.partition, self.descriptor.name())
            .map_err(|e| self.tag(e))
    }
}
