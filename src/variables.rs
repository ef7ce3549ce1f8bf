//! Descriptor constructors and fluent entry points.
//!
//! Descriptors are usually declared once and shared:
//!
//! ```
//! use bpmdata::prelude::*;
//! use once_cell::sync::Lazy;
//!
//! static ORDER_ID: Lazy<VariableDescriptor<String>> = Lazy::new(|| string_variable("orderId"));
//! static ORDER_TOTAL: Lazy<VariableDescriptor<f64>> = Lazy::new(|| double_variable("orderTotal"));
//!
//! let vars = builder()
//!     .set(&ORDER_ID, "1".to_string())?
//!     .set(&ORDER_TOTAL, 6.48)?
//!     .build();
//! assert_eq!(read_map(&ORDER_TOTAL, &vars).get()?, 6.48);
//! # Ok::<(), bpmdata::Error>(())
//! ```

use bpmdata_adapters::{
    CaseExecutionVariableWriter, ProcessExecutionVariableWriter, UserTaskVariableWriter,
    VariableMapBuilder, VariableMapWriter, VariableScopeWriter,
};
use bpmdata_core::{
    CaseService, RuntimeService, TaskService, VariableDescriptor, VariableMap, VariableScope,
    VariableValue,
};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// Descriptors
// =============================================================================

/// String variable
pub fn string_variable(name: impl Into<String>) -> VariableDescriptor<String> {
    VariableDescriptor::new(name)
}

/// UTC timestamp variable
pub fn date_variable(name: impl Into<String>) -> VariableDescriptor<DateTime<Utc>> {
    VariableDescriptor::new(name)
}

/// 32-bit integer variable
pub fn int_variable(name: impl Into<String>) -> VariableDescriptor<i32> {
    VariableDescriptor::new(name)
}

/// 64-bit integer variable
pub fn long_variable(name: impl Into<String>) -> VariableDescriptor<i64> {
    VariableDescriptor::new(name)
}

/// 16-bit integer variable
pub fn short_variable(name: impl Into<String>) -> VariableDescriptor<i16> {
    VariableDescriptor::new(name)
}

/// Floating point variable
pub fn double_variable(name: impl Into<String>) -> VariableDescriptor<f64> {
    VariableDescriptor::new(name)
}

/// Boolean variable
pub fn boolean_variable(name: impl Into<String>) -> VariableDescriptor<bool> {
    VariableDescriptor::new(name)
}

/// Variable of any convertible type.
///
/// Serde types become convertible through [`serde_variable!`](crate::serde_variable).
pub fn custom_variable<T: VariableValue>(name: impl Into<String>) -> VariableDescriptor<T> {
    VariableDescriptor::new(name)
}

/// Ordered list of `T`
pub fn list_variable<T: VariableValue>(name: impl Into<String>) -> VariableDescriptor<Vec<T>> {
    VariableDescriptor::new(name)
}

/// Set of `T`; duplicate stored elements collapse on read
pub fn set_variable<T: VariableValue + Ord>(name: impl Into<String>) -> VariableDescriptor<BTreeSet<T>> {
    VariableDescriptor::new(name)
}

/// String-keyed map of `V`
pub fn map_variable<V: VariableValue>(name: impl Into<String>) -> VariableDescriptor<BTreeMap<String, V>> {
    VariableDescriptor::new(name)
}

/// Nullable `T`: absence reads as `None` instead of failing
pub fn optional<T: VariableValue>(name: impl Into<String>) -> VariableDescriptor<Option<T>> {
    VariableDescriptor::new(name)
}

// =============================================================================
// Builders and writers
// =============================================================================

/// Start building a fresh variable map
pub fn builder() -> VariableMapBuilder {
    VariableMapBuilder::new()
}

/// Fluent writer over a variable map
pub fn writer_for_map(variables: &mut VariableMap) -> VariableMapWriter<'_> {
    VariableMapWriter::new(variables)
}

/// Fluent writer over a live scope
pub fn writer_for_scope<S: VariableScope + ?Sized>(scope: &mut S) -> VariableScopeWriter<'_, S> {
    VariableScopeWriter::new(scope)
}

/// Fluent writer over one execution of a runtime service
pub fn writer_for_execution<S: RuntimeService + ?Sized>(
    service: &S,
    execution_id: impl Into<String>,
) -> ProcessExecutionVariableWriter<'_, S> {
    ProcessExecutionVariableWriter::new(service, execution_id)
}

/// Fluent writer over one task of a task service
pub fn writer_for_task<S: TaskService + ?Sized>(
    service: &S,
    task_id: impl Into<String>,
) -> UserTaskVariableWriter<'_, S> {
    UserTaskVariableWriter::new(service, task_id)
}

/// Fluent writer over one case execution of a case service
pub fn writer_for_case<S: CaseService + ?Sized>(
    service: &S,
    case_execution_id: impl Into<String>,
) -> CaseExecutionVariableWriter<'_, S> {
    CaseExecutionVariableWriter::new(service, case_execution_id)
}
