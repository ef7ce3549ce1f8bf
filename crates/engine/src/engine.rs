//! In-memory process engine
//!
//! [`InMemoryEngine`] is a stand-in for a real workflow engine. It keeps just
//! enough structure to give every backend contract a faithful home:
//!
//! - a process instance owns the global variables of all its executions
//!   and tasks,
//! - every execution and every task owns its own local variables,
//! - case executions own one flat variable map.
//!
//! All maps are concurrent, so one engine can be shared across threads the
//! way a real engine's services are.

use crate::config::{EngineBuilder, EngineConfig};
use crate::external_task::LockedExternalTask;
use crate::scope::{DelegateExecution, DelegateTask};
use bpmdata_core::{
    BackendError, CaseService, Partition, RuntimeService, TaskService, Value, VariableMap,
};
use dashmap::DashMap;
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Clone)]
struct ExecutionRecord {
    process_instance_id: String,
    local: VariableMap,
}

#[derive(Debug, Clone)]
struct TaskRecord {
    execution_id: String,
    process_instance_id: String,
    local: VariableMap,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// In-memory engine implementing every id-addressed backend contract
#[derive(Debug, Default)]
pub struct InMemoryEngine {
    config: EngineConfig,
    process_instances: DashMap<String, VariableMap>,
    executions: DashMap<String, ExecutionRecord>,
    tasks: DashMap<String, TaskRecord>,
    case_executions: DashMap<String, VariableMap>,
}

impl InMemoryEngine {
    /// Create an engine with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for engine configuration
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Create an engine with an explicit configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // =========================================================================
    // Entity lifecycle
    // =========================================================================

    /// Start a process instance with `variables` as its globals.
    ///
    /// Returns the id of the root execution, which is also the process
    /// instance id.
    pub fn start_process_instance(&self, variables: VariableMap) -> String {
        let id = new_id();
        self.insert_process_instance(id.clone(), variables);
        id
    }

    fn insert_process_instance(&self, id: String, variables: VariableMap) {
        debug!(process_instance = %id, variables = variables.len(), "starting process instance");
        self.process_instances.insert(id.clone(), variables);
        self.executions.insert(
            id.clone(),
            ExecutionRecord {
                process_instance_id: id,
                local: VariableMap::new(),
            },
        );
    }

    /// Create a concurrent child execution sharing the parent's globals
    pub fn create_child_execution(&self, parent_execution_id: &str) -> Result<String, BackendError> {
        let process_instance_id = self.process_instance_of(parent_execution_id)?;
        let id = new_id();
        debug!(execution = %id, parent = parent_execution_id, "creating child execution");
        self.executions.insert(
            id.clone(),
            ExecutionRecord {
                process_instance_id,
                local: VariableMap::new(),
            },
        );
        Ok(id)
    }

    /// Create a user task waiting in `execution_id`
    pub fn create_task(&self, execution_id: &str) -> Result<String, BackendError> {
        let process_instance_id = self.process_instance_of(execution_id)?;
        let id = new_id();
        debug!(task = %id, execution = execution_id, "creating task");
        self.tasks.insert(
            id.clone(),
            TaskRecord {
                execution_id: execution_id.to_string(),
                process_instance_id,
                local: VariableMap::new(),
            },
        );
        Ok(id)
    }

    /// Complete a task, writing `variables` into the process instance globals.
    ///
    /// The task and its local variables are gone afterwards.
    pub fn complete_task(&self, task_id: &str, variables: VariableMap) -> Result<(), BackendError> {
        let (_, task) = self.tasks.remove(task_id).ok_or_else(|| {
            warn!(task = task_id, "complete on unknown task");
            BackendError::TaskNotFound(task_id.to_string())
        })?;
        let mut globals = self
            .process_instances
            .get_mut(&task.process_instance_id)
            .ok_or_else(|| BackendError::ExecutionNotFound(task.process_instance_id.clone()))?;
        for (name, value) in variables {
            store(globals.value_mut(), &name, value, self.config.null_writes_remove);
        }
        debug!(task = task_id, "completed task");
        Ok(())
    }

    /// Id of the execution a task waits in
    pub fn task_execution_id(&self, task_id: &str) -> Result<String, BackendError> {
        self.tasks
            .get(task_id)
            .map(|t| t.execution_id.clone())
            .ok_or_else(|| BackendError::TaskNotFound(task_id.to_string()))
    }

    /// Create a case execution with `variables`
    pub fn create_case_execution(&self, variables: VariableMap) -> String {
        let id = new_id();
        debug!(case_execution = %id, "creating case execution");
        self.case_executions.insert(id.clone(), variables);
        id
    }

    /// Lock an external task on `execution_id` for `worker_id`.
    ///
    /// The returned task carries a snapshot of the process instance globals
    /// taken now; later writes to the engine are not visible through it.
    pub fn lock_external_task(
        &self,
        execution_id: &str,
        topic_name: &str,
        worker_id: &str,
    ) -> Result<LockedExternalTask, BackendError> {
        let process_instance_id = self.process_instance_of(execution_id)?;
        let variables = self.execution_variables(execution_id, Partition::Global)?;
        debug!(execution = execution_id, topic = topic_name, worker = worker_id, "locking external task");
        Ok(LockedExternalTask::new(
            new_id(),
            topic_name,
            worker_id,
            execution_id,
            process_instance_id,
            variables,
        ))
    }

    /// Live scope of an execution, as code running inside it would see it
    pub fn delegate_execution(&self, execution_id: &str) -> Result<DelegateExecution<'_>, BackendError> {
        self.process_instance_of(execution_id)?;
        Ok(DelegateExecution::new(self, execution_id))
    }

    /// Live scope of a task, as a task listener would see it
    pub fn delegate_task(&self, task_id: &str) -> Result<DelegateTask<'_>, BackendError> {
        self.task_execution_id(task_id)?;
        Ok(DelegateTask::new(self, task_id))
    }

    // =========================================================================
    // Lookup helpers
    // =========================================================================

    fn process_instance_of(&self, execution_id: &str) -> Result<String, BackendError> {
        self.executions
            .get(execution_id)
            .map(|e| e.process_instance_id.clone())
            .ok_or_else(|| {
                warn!(execution = execution_id, "unknown execution");
                BackendError::ExecutionNotFound(execution_id.to_string())
            })
    }

    fn read_execution<R>(
        &self,
        execution_id: &str,
        partition: Partition,
        read: impl FnOnce(&VariableMap) -> R,
    ) -> Result<R, BackendError> {
        match partition {
            Partition::Local => self
                .executions
                .get(execution_id)
                .map(|e| read(&e.local))
                .ok_or_else(|| BackendError::ExecutionNotFound(execution_id.to_string())),
            Partition::Global => {
                let pi = self.process_instance_of(execution_id)?;
                self.process_instances
                    .get(&pi)
                    .map(|vars| read(vars.value()))
                    .ok_or(BackendError::ExecutionNotFound(pi))
            }
        }
    }

    fn write_execution(
        &self,
        execution_id: &str,
        partition: Partition,
        write: impl FnOnce(&mut VariableMap),
    ) -> Result<(), BackendError> {
        if !self.executions.contains_key(execution_id) && self.config.auto_create_entities {
            self.insert_process_instance(execution_id.to_string(), VariableMap::new());
        }
        match partition {
            Partition::Local => {
                let mut execution = self.executions.get_mut(execution_id).ok_or_else(|| {
                    warn!(execution = execution_id, "write to unknown execution");
                    BackendError::ExecutionNotFound(execution_id.to_string())
                })?;
                write(&mut execution.local);
            }
            Partition::Global => {
                let pi = self.process_instance_of(execution_id)?;
                let mut vars = self
                    .process_instances
                    .get_mut(&pi)
                    .ok_or(BackendError::ExecutionNotFound(pi))?;
                write(vars.value_mut());
            }
        }
        Ok(())
    }

    fn task_process_instance(&self, task_id: &str) -> Result<String, BackendError> {
        self.tasks
            .get(task_id)
            .map(|t| t.process_instance_id.clone())
            .ok_or_else(|| {
                warn!(task = task_id, "unknown task");
                BackendError::TaskNotFound(task_id.to_string())
            })
    }

    fn read_task<R>(
        &self,
        task_id: &str,
        partition: Partition,
        read: impl FnOnce(&VariableMap) -> R,
    ) -> Result<R, BackendError> {
        match partition {
            Partition::Local => self
                .tasks
                .get(task_id)
                .map(|t| read(&t.local))
                .ok_or_else(|| BackendError::TaskNotFound(task_id.to_string())),
            Partition::Global => {
                let pi = self.task_process_instance(task_id)?;
                self.process_instances
                    .get(&pi)
                    .map(|vars| read(vars.value()))
                    .ok_or(BackendError::ExecutionNotFound(pi))
            }
        }
    }

    fn write_task(
        &self,
        task_id: &str,
        partition: Partition,
        write: impl FnOnce(&mut VariableMap),
    ) -> Result<(), BackendError> {
        if !self.tasks.contains_key(task_id) && self.config.auto_create_entities {
            let execution_id = self.start_process_instance(VariableMap::new());
            debug!(task = task_id, execution = %execution_id, "auto-creating task");
            self.tasks.insert(
                task_id.to_string(),
                TaskRecord {
                    process_instance_id: execution_id.clone(),
                    execution_id,
                    local: VariableMap::new(),
                },
            );
        }
        match partition {
            Partition::Local => {
                let mut task = self.tasks.get_mut(task_id).ok_or_else(|| {
                    warn!(task = task_id, "write to unknown task");
                    BackendError::TaskNotFound(task_id.to_string())
                })?;
                write(&mut task.local);
            }
            Partition::Global => {
                let pi = self.task_process_instance(task_id)?;
                let mut vars = self
                    .process_instances
                    .get_mut(&pi)
                    .ok_or(BackendError::ExecutionNotFound(pi))?;
                write(vars.value_mut());
            }
        }
        Ok(())
    }

    fn write_case(
        &self,
        case_execution_id: &str,
        write: impl FnOnce(&mut VariableMap),
    ) -> Result<(), BackendError> {
        if self.config.auto_create_entities {
            let mut vars = self
                .case_executions
                .entry(case_execution_id.to_string())
                .or_default();
            write(vars.value_mut());
            return Ok(());
        }
        let mut vars = self.case_executions.get_mut(case_execution_id).ok_or_else(|| {
            warn!(case_execution = case_execution_id, "write to unknown case execution");
            BackendError::CaseExecutionNotFound(case_execution_id.to_string())
        })?;
        write(vars.value_mut());
        Ok(())
    }

    fn read_case<R>(
        &self,
        case_execution_id: &str,
        read: impl FnOnce(&VariableMap) -> R,
    ) -> Result<R, BackendError> {
        self.case_executions
            .get(case_execution_id)
            .map(|vars| read(vars.value()))
            .ok_or_else(|| BackendError::CaseExecutionNotFound(case_execution_id.to_string()))
    }
}

/// Store `value` under `name`, honouring the null-removes switch
pub(crate) fn store(vars: &mut VariableMap, name: &str, value: Value, null_removes: bool) {
    if value.is_null() && null_removes {
        vars.remove(name);
    } else {
        vars.insert(name, value);
    }
}

impl RuntimeService for InMemoryEngine {
    fn execution_variable(
        &self,
        execution_id: &str,
        partition: Partition,
        name: &str,
    ) -> Result<Option<Value>, BackendError> {
        self.read_execution(execution_id, partition, |vars| vars.get(name).cloned())
    }

    fn set_execution_variable(
        &self,
        execution_id: &str,
        partition: Partition,
        name: &str,
        value: Value,
    ) -> Result<(), BackendError> {
        let null_removes = self.config.null_writes_remove;
        self.write_execution(execution_id, partition, |vars| {
            store(vars, name, value, null_removes)
        })
    }

    fn remove_execution_variable(
        &self,
        execution_id: &str,
        partition: Partition,
        name: &str,
    ) -> Result<(), BackendError> {
        self.write_execution(execution_id, partition, |vars| {
            vars.remove(name);
        })
    }

    fn execution_variables(
        &self,
        execution_id: &str,
        partition: Partition,
    ) -> Result<VariableMap, BackendError> {
        self.read_execution(execution_id, partition, VariableMap::clone)
    }
}

impl TaskService for InMemoryEngine {
    fn task_variable(
        &self,
        task_id: &str,
        partition: Partition,
        name: &str,
    ) -> Result<Option<Value>, BackendError> {
        self.read_task(task_id, partition, |vars| vars.get(name).cloned())
    }

    fn set_task_variable(
        &self,
        task_id: &str,
        partition: Partition,
        name: &str,
        value: Value,
    ) -> Result<(), BackendError> {
        let null_removes = self.config.null_writes_remove;
        self.write_task(task_id, partition, |vars| store(vars, name, value, null_removes))
    }

    fn remove_task_variable(
        &self,
        task_id: &str,
        partition: Partition,
        name: &str,
    ) -> Result<(), BackendError> {
        self.write_task(task_id, partition, |vars| {
            vars.remove(name);
        })
    }

    fn task_variables(&self, task_id: &str, partition: Partition) -> Result<VariableMap, BackendError> {
        self.read_task(task_id, partition, VariableMap::clone)
    }
}

impl CaseService for InMemoryEngine {
    fn case_variable(
        &self,
        case_execution_id: &str,
        name: &str,
    ) -> Result<Option<Value>, BackendError> {
        self.read_case(case_execution_id, |vars| vars.get(name).cloned())
    }

    fn set_case_variable(
        &self,
        case_execution_id: &str,
        name: &str,
        value: Value,
    ) -> Result<(), BackendError> {
        let null_removes = self.config.null_writes_remove;
        self.write_case(case_execution_id, |vars| store(vars, name, value, null_removes))
    }

    fn remove_case_variable(&self, case_execution_id: &str, name: &str) -> Result<(), BackendError> {
        self.write_case(case_execution_id, |vars| {
            vars.remove(name);
        })
    }

    fn case_variables(&self, case_execution_id: &str) -> Result<VariableMap, BackendError> {
        self.read_case(case_execution_id, VariableMap::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(entries: &[(&str, i64)]) -> VariableMap {
        entries.iter().map(|(k, v)| (*k, Value::Int(*v))).collect()
    }

    #[test]
    fn test_start_sets_globals() {
        let engine = InMemoryEngine::new();
        let id = engine.start_process_instance(vars(&[("a", 1)]));
        assert_eq!(
            engine.execution_variable(&id, Partition::Global, "a").unwrap(),
            Some(Value::Int(1))
        );
        assert_eq!(engine.execution_variable(&id, Partition::Local, "a").unwrap(), None);
    }

    #[test]
    fn test_child_execution_shares_globals_not_locals() {
        let engine = InMemoryEngine::new();
        let root = engine.start_process_instance(VariableMap::new());
        let child = engine.create_child_execution(&root).unwrap();

        engine
            .set_execution_variable(&child, Partition::Global, "shared", Value::Int(1))
            .unwrap();
        engine
            .set_execution_variable(&child, Partition::Local, "mine", Value::Int(2))
            .unwrap();

        assert!(engine.has_execution_variable(&root, Partition::Global, "shared").unwrap());
        assert!(!engine.has_execution_variable(&root, Partition::Local, "mine").unwrap());
    }

    #[test]
    fn test_task_global_is_process_instance() {
        let engine = InMemoryEngine::new();
        let execution = engine.start_process_instance(VariableMap::new());
        let task = engine.create_task(&execution).unwrap();

        engine
            .set_task_variable(&task, Partition::Global, "approved", Value::Bool(true))
            .unwrap();
        assert_eq!(
            engine.execution_variable(&execution, Partition::Global, "approved").unwrap(),
            Some(Value::Bool(true))
        );
        assert_eq!(engine.task_execution_id(&task).unwrap(), execution);
    }

    #[test]
    fn test_complete_task_merges_and_removes() {
        let engine = InMemoryEngine::new();
        let execution = engine.start_process_instance(vars(&[("a", 1)]));
        let task = engine.create_task(&execution).unwrap();

        engine.complete_task(&task, vars(&[("b", 2)])).unwrap();

        let globals = engine.execution_variables(&execution, Partition::Global).unwrap();
        assert_eq!(globals, vars(&[("a", 1), ("b", 2)]));
        assert_eq!(
            engine.task_variable(&task, Partition::Local, "b"),
            Err(BackendError::TaskNotFound(task.clone()))
        );
    }

    #[test]
    fn test_unknown_ids_fail() {
        let engine = InMemoryEngine::new();
        assert_eq!(
            engine.set_task_variable("nope", Partition::Local, "a", Value::Int(1)),
            Err(BackendError::TaskNotFound("nope".into()))
        );
        assert_eq!(
            engine.execution_variables("nope", Partition::Global),
            Err(BackendError::ExecutionNotFound("nope".into()))
        );
        assert_eq!(
            engine.case_variable("nope", "a"),
            Err(BackendError::CaseExecutionNotFound("nope".into()))
        );
    }

    #[test]
    fn test_auto_create_on_write() {
        let engine = InMemoryEngine::builder().auto_create_entities(true).build();

        engine.set_case_variable("case-1", "a", Value::Int(1)).unwrap();
        engine
            .set_task_variable("task-1", Partition::Local, "b", Value::Int(2))
            .unwrap();
        engine
            .set_execution_variable("exec-1", Partition::Global, "c", Value::Int(3))
            .unwrap();

        assert_eq!(engine.case_variable("case-1", "a").unwrap(), Some(Value::Int(1)));
        assert_eq!(
            engine.task_variable("task-1", Partition::Local, "b").unwrap(),
            Some(Value::Int(2))
        );
        assert_eq!(
            engine.execution_variable("exec-1", Partition::Global, "c").unwrap(),
            Some(Value::Int(3))
        );
        // reads never create
        assert!(engine.case_variable("case-2", "a").is_err());
    }

    #[test]
    fn test_null_write_removes_by_default() {
        let engine = InMemoryEngine::new();
        let case = engine.create_case_execution(vars(&[("a", 1)]));
        engine.set_case_variable(&case, "a", Value::Null).unwrap();
        assert!(!engine.has_case_variable(&case, "a").unwrap());
    }

    #[test]
    fn test_null_placeholder_when_configured() {
        let engine = InMemoryEngine::builder().null_writes_remove(false).build();
        let case = engine.create_case_execution(VariableMap::new());
        engine.set_case_variable(&case, "a", Value::Null).unwrap();
        assert_eq!(engine.case_variable(&case, "a").unwrap(), Some(Value::Null));
    }

    #[test]
    fn test_locked_task_is_a_snapshot() {
        use bpmdata_core::VariableSnapshot;

        let engine = InMemoryEngine::new();
        let execution = engine.start_process_instance(vars(&[("a", 1)]));
        let locked = engine.lock_external_task(&execution, "payments", "worker-1").unwrap();

        engine
            .set_execution_variable(&execution, Partition::Global, "a", Value::Int(2))
            .unwrap();

        assert_eq!(locked.variable("a"), Some(&Value::Int(1)));
        assert_eq!(locked.topic_name(), "payments");
        assert_eq!(locked.process_instance_id(), execution);
    }
}
