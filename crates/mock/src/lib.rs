//! Task service fake for tests
//!
//! [`TaskServiceVariableMockBuilder`] declares which variables a task
//! service knows about and what they hold, then builds a
//! [`MockTaskService`] that answers for any task id.
//!
//! ```
//! use bpmdata_adapters::{bind_task, ReadAdapter};
//! use bpmdata_core::VariableDescriptor;
//! use bpmdata_mock::TaskServiceVariableMockBuilder;
//!
//! let approved = VariableDescriptor::<bool>::new("approved");
//! let tasks = TaskServiceVariableMockBuilder::new()
//!     .set(&approved, true)?
//!     .build();
//!
//! assert!(bind_task(&approved, &tasks, "any-task").get()?);
//! # Ok::<(), bpmdata_core::VariableError>(())
//! ```

#![warn(missing_docs)]

use bpmdata_adapters::{bind_map, WriteAdapter};
use bpmdata_core::{
    BackendError, Partition, Result, TaskService, Value, VariableDescriptor, VariableMap,
    VariableValue,
};
use parking_lot::RwLock;
use std::collections::BTreeSet;
use tracing::warn;

/// Declares the variables a [`MockTaskService`] answers for
#[derive(Debug, Clone, Default)]
pub struct TaskServiceVariableMockBuilder {
    defined: BTreeSet<String>,
    global: VariableMap,
    local: VariableMap,
}

impl TaskServiceVariableMockBuilder {
    /// Start with no defined variables
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `descriptor` known to the service without a value
    pub fn define<T: VariableValue>(mut self, descriptor: &VariableDescriptor<T>) -> Self {
        self.defined.insert(descriptor.name().to_string());
        self
    }

    /// Define `descriptor` and seed its global value
    pub fn set<T: VariableValue>(mut self, descriptor: &VariableDescriptor<T>, value: T) -> Result<Self> {
        bind_map(descriptor, &mut self.global).set(value)?;
        Ok(self.define(descriptor))
    }

    /// Define `descriptor` and seed its local value
    pub fn set_local<T: VariableValue>(
        mut self,
        descriptor: &VariableDescriptor<T>,
        value: T,
    ) -> Result<Self> {
        bind_map(descriptor, &mut self.local).set(value)?;
        Ok(self.define(descriptor))
    }

    /// Freeze the definitions into a service
    pub fn build(self) -> MockTaskService {
        MockTaskService {
            defined: self.defined,
            global: RwLock::new(self.global),
            local: RwLock::new(self.local),
        }
    }
}

/// [`TaskService`] with one shared pair of variable maps
///
/// Every task id sees the same variables. Reading or writing a name that
/// was never defined fails with [`BackendError::UndefinedVariable`].
#[derive(Debug)]
pub struct MockTaskService {
    defined: BTreeSet<String>,
    global: RwLock<VariableMap>,
    local: RwLock<VariableMap>,
}

impl MockTaskService {
    /// Names this service answers for
    pub fn defined(&self) -> impl Iterator<Item = &str> {
        self.defined.iter().map(String::as_str)
    }

    /// Copy of the entries of `partition` whose names are in `names`
    pub fn task_variables_named<S: AsRef<str>>(
        &self,
        _task_id: &str,
        partition: Partition,
        names: &[S],
    ) -> VariableMap {
        self.partition(partition).read().filter_names(names)
    }

    fn partition(&self, partition: Partition) -> &RwLock<VariableMap> {
        match partition {
            Partition::Global => &self.global,
            Partition::Local => &self.local,
        }
    }

    fn check_defined(&self, task_id: &str, name: &str) -> std::result::Result<(), BackendError> {
        if self.defined.contains(name) {
            Ok(())
        } else {
            warn!(task = task_id, variable = name, "access to undefined variable");
            Err(BackendError::UndefinedVariable(name.to_string()))
        }
    }
}

impl TaskService for MockTaskService {
    fn task_variable(
        &self,
        task_id: &str,
        partition: Partition,
        name: &str,
    ) -> std::result::Result<Option<Value>, BackendError> {
        self.check_defined(task_id, name)?;
        Ok(self.partition(partition).read().get(name).cloned())
    }

    fn set_task_variable(
        &self,
        task_id: &str,
        partition: Partition,
        name: &str,
        value: Value,
    ) -> std::result::Result<(), BackendError> {
        self.check_defined(task_id, name)?;
        let mut vars = self.partition(partition).write();
        if value.is_null() {
            vars.remove(name);
        } else {
            vars.insert(name, value);
        }
        Ok(())
    }

    fn remove_task_variable(
        &self,
        task_id: &str,
        partition: Partition,
        name: &str,
    ) -> std::result::Result<(), BackendError> {
        self.check_defined(task_id, name)?;
        self.partition(partition).write().remove(name);
        Ok(())
    }

    fn task_variables(
        &self,
        _task_id: &str,
        partition: Partition,
    ) -> std::result::Result<VariableMap, BackendError> {
        Ok(self.partition(partition).read().clone())
    }
}
