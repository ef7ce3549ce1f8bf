//! Backend store traits
//!
//! Methods on the id-addressed services carry a service prefix
//! (`task_`, `execution_`, `case_`) so a single engine type can implement
//! all of them without ambiguous method calls.

use crate::error::BackendError;
use crate::types::{Partition, VariableMap};
use crate::value::Value;

/// A live, two-partition variable scope
///
/// Implemented by whatever the engine hands to code running inside an
/// execution or a task listener.
pub trait VariableScope {
    /// Read the raw value stored under `name`
    fn variable(&self, partition: Partition, name: &str) -> Result<Option<Value>, BackendError>;

    /// Store `value` under `name`, overwriting any previous entry
    fn set_variable(
        &mut self,
        partition: Partition,
        name: &str,
        value: Value,
    ) -> Result<(), BackendError>;

    /// Delete the entry under `name`; deleting an absent entry is not an error
    fn remove_variable(&mut self, partition: Partition, name: &str) -> Result<(), BackendError>;

    /// Check whether an entry exists under `name`
    fn has_variable(&self, partition: Partition, name: &str) -> Result<bool, BackendError> {
        Ok(self.variable(partition, name)?.is_some())
    }

    /// Copy of every entry in `partition`
    fn variables(&self, partition: Partition) -> Result<VariableMap, BackendError>;
}

impl<S: VariableScope + ?Sized> VariableScope for &mut S {
    fn variable(&self, partition: Partition, name: &str) -> Result<Option<Value>, BackendError> {
        (**self).variable(partition, name)
    }

    fn set_variable(
        &mut self,
        partition: Partition,
        name: &str,
        value: Value,
    ) -> Result<(), BackendError> {
        (**self).set_variable(partition, name, value)
    }

    fn remove_variable(&mut self, partition: Partition, name: &str) -> Result<(), BackendError> {
        (**self).remove_variable(partition, name)
    }

    fn has_variable(&self, partition: Partition, name: &str) -> Result<bool, BackendError> {
        (**self).has_variable(partition, name)
    }

    fn variables(&self, partition: Partition) -> Result<VariableMap, BackendError> {
        (**self).variables(partition)
    }
}

/// Variables of running user tasks
pub trait TaskService {
    /// Read a task variable
    fn task_variable(
        &self,
        task_id: &str,
        partition: Partition,
        name: &str,
    ) -> Result<Option<Value>, BackendError>;

    /// Write a task variable
    fn set_task_variable(
        &self,
        task_id: &str,
        partition: Partition,
        name: &str,
        value: Value,
    ) -> Result<(), BackendError>;

    /// Delete a task variable
    fn remove_task_variable(
        &self,
        task_id: &str,
        partition: Partition,
        name: &str,
    ) -> Result<(), BackendError>;

    /// Check whether a task variable exists
    fn has_task_variable(
        &self,
        task_id: &str,
        partition: Partition,
        name: &str,
    ) -> Result<bool, BackendError> {
        Ok(self.task_variable(task_id, partition, name)?.is_some())
    }

    /// Copy of every variable visible to the task in `partition`
    fn task_variables(&self, task_id: &str, partition: Partition)
        -> Result<VariableMap, BackendError>;
}

/// Variables of running process executions
pub trait RuntimeService {
    /// Read an execution variable
    fn execution_variable(
        &self,
        execution_id: &str,
        partition: Partition,
        name: &str,
    ) -> Result<Option<Value>, BackendError>;

    /// Write an execution variable
    fn set_execution_variable(
        &self,
        execution_id: &str,
        partition: Partition,
        name: &str,
        value: Value,
    ) -> Result<(), BackendError>;

    /// Delete an execution variable
    fn remove_execution_variable(
        &self,
        execution_id: &str,
        partition: Partition,
        name: &str,
    ) -> Result<(), BackendError>;

    /// Check whether an execution variable exists
    fn has_execution_variable(
        &self,
        execution_id: &str,
        partition: Partition,
        name: &str,
    ) -> Result<bool, BackendError> {
        Ok(self
            .execution_variable(execution_id, partition, name)?
            .is_some())
    }

    /// Copy of every variable of the execution in `partition`
    fn execution_variables(
        &self,
        execution_id: &str,
        partition: Partition,
    ) -> Result<VariableMap, BackendError>;
}

/// Variables of case executions
///
/// Case executions have a single variable partition.
pub trait CaseService {
    /// Read a case variable
    fn case_variable(
        &self,
        case_execution_id: &str,
        name: &str,
    ) -> Result<Option<Value>, BackendError>;

    /// Write a case variable
    fn set_case_variable(
        &self,
        case_execution_id: &str,
        name: &str,
        value: Value,
    ) -> Result<(), BackendError>;

    /// Delete a case variable
    fn remove_case_variable(&self, case_execution_id: &str, name: &str)
        -> Result<(), BackendError>;

    /// Check whether a case variable exists
    fn has_case_variable(&self, case_execution_id: &str, name: &str) -> Result<bool, BackendError> {
        Ok(self.case_variable(case_execution_id, name)?.is_some())
    }

    /// Copy of every variable of the case execution
    fn case_variables(&self, case_execution_id: &str) -> Result<VariableMap, BackendError>;
}

/// Immutable variables handed to a worker with a locked unit of work
pub trait VariableSnapshot {
    /// Read the raw value stored under `name`
    fn variable(&self, name: &str) -> Option<&Value>;

    /// Check whether an entry exists under `name`
    fn has_variable(&self, name: &str) -> bool {
        self.variable(name).is_some()
    }
}

impl VariableSnapshot for VariableMap {
    fn variable(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}
