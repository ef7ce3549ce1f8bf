//! Adapter over a [`RuntimeService`]

use crate::adapter::{ReadAdapter, VariableAdapter, WriteAdapter};
use bpmdata_core::{
    BackendError, BackendKind, Partition, Result, RuntimeService, Value, VariableDescriptor,
    VariableError, VariableValue,
};

/// Descriptor bound to an execution id on a runtime service
pub struct RuntimeServiceAdapter<'a, T, S: RuntimeService + ?Sized> {
    descriptor: &'a VariableDescriptor<T>,
    service: &'a S,
    execution_id: String,
    partition: Partition,
}

/// Bind `descriptor` to the process variables of `execution_id`
pub fn bind_execution<'a, T: VariableValue, S: RuntimeService + ?Sized>(
    descriptor: &'a VariableDescriptor<T>,
    service: &'a S,
    execution_id: impl Into<String>,
) -> RuntimeServiceAdapter<'a, T, S> {
    RuntimeServiceAdapter {
        descriptor,
        service,
        execution_id: execution_id.into(),
        partition: Partition::Global,
    }
}

/// Bind `descriptor` to the execution-local variables of `execution_id`
pub fn bind_execution_local<'a, T: VariableValue, S: RuntimeService + ?Sized>(
    descriptor: &'a VariableDescriptor<T>,
    service: &'a S,
    execution_id: impl Into<String>,
) -> RuntimeServiceAdapter<'a, T, S> {
    RuntimeServiceAdapter {
        descriptor,
        service,
        execution_id: execution_id.into(),
        partition: Partition::Local,
    }
}

impl<T, S: RuntimeService + ?Sized> RuntimeServiceAdapter<'_, T, S> {
    /// Bound execution id
    pub fn execution_id(&self) -> &str {
        &self.execution_id
    }

    /// Partition reads and writes go to
    pub fn partition(&self) -> Partition {
        self.partition
    }

    fn tag(&self, err: BackendError) -> VariableError {
        VariableError::backend(self.descriptor.name(), BackendKind::RuntimeService, err)
    }
}

impl<T, S: RuntimeService + ?Sized> std::fmt::Debug for RuntimeServiceAdapter<'_, T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeServiceAdapter")
            .field("variable", &self.descriptor.name())
            .field("execution_id", &self.execution_id)
            .field("partition", &self.partition)
            .finish_non_exhaustive()
    }
}

impl<T: VariableValue, S: RuntimeService + ?Sized> VariableAdapter<T>
    for RuntimeServiceAdapter<'_, T, S>
{
    fn descriptor(&self) -> &VariableDescriptor<T> {
        self.descriptor
    }

    fn backend_kind(&self) -> BackendKind {
        BackendKind::RuntimeService
    }
}

impl<T: VariableValue, S: RuntimeService + ?Sized> ReadAdapter<T>
    for RuntimeServiceAdapter<'_, T, S>
{
    fn read_value(&self) -> Result<Option<Value>> {
        self.service
            .execution_variable(&self.execution_id, self.partition, self.descriptor.name())
            .map_err(|e| self.tag(e))
    }
}

impl<T: VariableValue, S: RuntimeService + ?Sized> WriteAdapter<T>
    for RuntimeServiceAdapter<'_, T, S>
{
    fn write_value(&mut self, value: Value) -> Result<()> {
        self.service
            .set_execution_variable(&self.execution_id, self.partition, self.descriptor.name(), value)
            .map_err(|e| self.tag(e))
    }

    fn delete_value(&mut self) -> Result<()> {
        self.service
            .remove_execution_variable(&self.execution_id, self.partition, self.descriptor.name())
            .map_err(|e| self.tag(e))
    }
}
