//! Adapter over a live [`VariableScope`]

use crate::adapter::{ReadAdapter, VariableAdapter, WriteAdapter};
use bpmdata_core::{
    BackendKind, Partition, Result, Value, VariableDescriptor, VariableError, VariableScope,
    VariableValue,
};

/// Descriptor bound to one partition of a scope
pub struct VariableScopeAdapter<'a, T, S: VariableScope + ?Sized> {
    descriptor: &'a VariableDescriptor<T>,
    scope: &'a mut S,
    partition: Partition,
}

/// Bind `descriptor` to the global partition of `scope`
pub fn bind_scope<'a, T: VariableValue, S: VariableScope + ?Sized>(
    descriptor: &'a VariableDescriptor<T>,
    scope: &'a mut S,
) -> VariableScopeAdapter<'a, T, S> {
    VariableScopeAdapter {
        descriptor,
        scope,
        partition: Partition::Global,
    }
}

/// Bind `descriptor` to the local partition of `scope`
pub fn bind_scope_local<'a, T: VariableValue, S: VariableScope + ?Sized>(
    descriptor: &'a VariableDescriptor<T>,
    scope: &'a mut S,
) -> VariableScopeAdapter<'a, T, S> {
    VariableScopeAdapter {
        descriptor,
        scope,
        partition: Partition::Local,
    }
}

impl<T, S: VariableScope + ?Sized> VariableScopeAdapter<'_, T, S> {
    /// Partition reads and writes go to
    pub fn partition(&self) -> Partition {
        self.partition
    }
}

impl<T, S: VariableScope + ?Sized> std::fmt::Debug for VariableScopeAdapter<'_, T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariableScopeAdapter")
            .field("variable", &self.descriptor.name())
            .field("partition", &self.partition)
            .finish_non_exhaustive()
    }
}

impl<T: VariableValue, S: VariableScope + ?Sized> VariableAdapter<T>
    for VariableScopeAdapter<'_, T, S>
{
    fn descriptor(&self) -> &VariableDescriptor<T> {
        self.descriptor
    }

    fn backend_kind(&self) -> BackendKind {
        BackendKind::VariableScope
    }
}

impl<T: VariableValue, S: VariableScope + ?Sized> ReadAdapter<T> for VariableScopeAdapter<'_, T, S> {
    fn read_value(&self) -> Result<Option<Value>> {
        self.scope
            .variable(self.partition, self.descriptor.name())
            .map_err(|e| VariableError::backend(self.descriptor.name(), BackendKind::VariableScope, e))
    }
}

impl<T: VariableValue, S: VariableScope + ?Sized> WriteAdapter<T>
    for VariableScopeAdapter<'_, T, S>
{
    fn write_value(&mut self, value: Value) -> Result<()> {
        self.scope
            .set_variable(self.partition, self.descriptor.name(), value)
            .map_err(|e| VariableError::backend(self.descriptor.name(), BackendKind::VariableScope, e))
    }

    fn delete_value(&mut self) -> Result<()> {
        self.scope
            .remove_variable(self.partition, self.descriptor.name())
            .map_err(|e| VariableError::backend(self.descriptor.name(), BackendKind::VariableScope, e))
    }
}
