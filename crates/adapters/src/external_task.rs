//! Read-only adapter over a locked external task's variable snapshot

use crate::adapter::{ReadAdapter, VariableAdapter};
use bpmdata_core::{BackendKind, Result, Value, VariableDescriptor, VariableSnapshot, VariableValue};

/// Descriptor bound to an immutable snapshot
pub struct ExternalTaskReader<'a, T, S: VariableSnapshot + ?Sized> {
    descriptor: &'a VariableDescriptor<T>,
    snapshot: &'a S,
}

/// Bind `descriptor` to a snapshot for reading
///
/// There is no write counterpart; a snapshot can't be changed.
pub fn bind_snapshot<'a, T: VariableValue, S: VariableSnapshot + ?Sized>(
    descriptor: &'a VariableDescriptor<T>,
    snapshot: &'a S,
) -> ExternalTaskReader<'a, T, S> {
    ExternalTaskReader {
        descriptor,
        snapshot,
    }
}

impl<T, S: VariableSnapshot + ?Sized> std::fmt::Debug for ExternalTaskReader<'_, T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalTaskReader")
            .field("variable", &self.descriptor.name())
            .finish_non_exhaustive()
    }
}

impl<T: VariableValue, S: VariableSnapshot + ?Sized> VariableAdapter<T>
    for ExternalTaskReader<'_, T, S>
{
    fn descriptor(&self) -> &VariableDescriptor<T> {
        self.descriptor
    }

    fn backend_kind(&self) -> BackendKind {
        BackendKind::ExternalTask
    }
}

impl<T: VariableValue, S: VariableSnapshot + ?Sized> ReadAdapter<T> for ExternalTaskReader<'_, T, S> {
    fn read_value(&self) -> Result<Option<Value>> {
        Ok(self.snapshot.variable(self.descriptor.name()).cloned())
    }
}
