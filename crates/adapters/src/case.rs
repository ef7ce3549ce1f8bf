//! Adapter over a [`CaseService`]

use crate::adapter::{ReadAdapter, VariableAdapter, WriteAdapter};
use bpmdata_core::{
    BackendError, BackendKind, CaseService, Result, Value, VariableDescriptor, VariableError,
    VariableValue,
};

/// Descriptor bound to a case execution
pub struct CaseServiceAdapter<'a, T, S: CaseService + ?Sized> {
    descriptor: &'a VariableDescriptor<T>,
    service: &'a S,
    case_execution_id: String,
}

/// Bind `descriptor` to the variables of `case_execution_id`
pub fn bind_case<'a, T: VariableValue, S: CaseService + ?Sized>(
    descriptor: &'a VariableDescriptor<T>,
    service: &'a S,
    case_execution_id: impl Into<String>,
) -> CaseServiceAdapter<'a, T, S> {
    CaseServiceAdapter {
        descriptor,
        service,
        case_execution_id: case_execution_id.into(),
    }
}

impl<T, S: CaseService + ?Sized> CaseServiceAdapter<'_, T, S> {
    /// Bound case execution id
    pub fn case_execution_id(&self) -> &str {
        &self.case_execution_id
    }

    fn tag(&self, err: BackendError) -> VariableError {
        VariableError::backend(self.descriptor.name(), BackendKind::CaseService, err)
    }
}

impl<T, S: CaseService + ?Sized> std::fmt::Debug for CaseServiceAdapter<'_, T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaseServiceAdapter")
            .field("variable", &self.descriptor.name())
            .field("case_execution_id", &self.case_execution_id)
            .finish_non_exhaustive()
    }
}

impl<T: VariableValue, S: CaseService + ?Sized> VariableAdapter<T> for CaseServiceAdapter<'_, T, S> {
    fn descriptor(&self) -> &VariableDescriptor<T> {
        self.descriptor
    }

    fn backend_kind(&self) -> BackendKind {
        BackendKind::CaseService
    }
}

impl<T: VariableValue, S: CaseService + ?Sized> ReadAdapter<T> for CaseServiceAdapter<'_, T, S> {
    fn read_value(&self) -> Result<Option<Value>> {
        self.service
            .case_variable(&self.case_execution_id, self.descriptor.name())
            .map_err(|e| self.tag(e))
    }
}

impl<T: VariableValue, S: CaseService + ?Sized> WriteAdapter<T> for CaseServiceAdapter<'_, T, S> {
    fn write_value(&mut self, value: Value) -> Result<()> {
        self.service
            .set_case_variable(&self.case_execution_id, self.descriptor.name(), value)
            .map_err(|e| self.tag(e))
    }

    fn delete_value(&mut self) -> Result<()> {
        self.service
            .remove_case_variable(&self.case_execution_id, self.descriptor.name())
            .map_err(|e| self.tag(e))
    }
}
