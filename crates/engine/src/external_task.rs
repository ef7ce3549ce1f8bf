//! Locked external tasks
//!
//! An external task handed to a worker carries a copy of the process
//! variables taken when it was locked. Workers can only read it; results
//! go back to the engine through other channels.

use bpmdata_core::{Value, VariableMap, VariableSnapshot};

/// External task locked by a worker, with its variable snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedExternalTask {
    id: String,
    topic_name: String,
    worker_id: String,
    execution_id: String,
    process_instance_id: String,
    variables: VariableMap,
}

impl LockedExternalTask {
    /// Create a locked task directly, e.g. from a worker's fetch response
    pub fn new(
        id: impl Into<String>,
        topic_name: impl Into<String>,
        worker_id: impl Into<String>,
        execution_id: impl Into<String>,
        process_instance_id: impl Into<String>,
        variables: VariableMap,
    ) -> Self {
        Self {
            id: id.into(),
            topic_name: topic_name.into(),
            worker_id: worker_id.into(),
            execution_id: execution_id.into(),
            process_instance_id: process_instance_id.into(),
            variables,
        }
    }

    /// External task id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Topic the task was fetched from
    pub fn topic_name(&self) -> &str {
        &self.topic_name
    }

    /// Worker holding the lock
    pub fn worker_id(&self) -> &str {
        &self.worker_id
    }

    /// Execution the task belongs to
    pub fn execution_id(&self) -> &str {
        &self.execution_id
    }

    /// Process instance the task belongs to
    pub fn process_instance_id(&self) -> &str {
        &self.process_instance_id
    }

    /// All snapshot variables
    pub fn variables(&self) -> &VariableMap {
        &self.variables
    }
}

impl VariableSnapshot for LockedExternalTask {
    fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }
}
