//! Task service fake driving the same adapters as the real engine

use crate::*;
use bpmdata::{BackendError, TaskServiceVariableMockBuilder};

#[test]
fn test_approver_code_against_fake() {
    init_tracing();
    let tasks = TaskServiceVariableMockBuilder::new()
        .set(&ORDER_ID, "1".into())
        .unwrap()
        .set(&ORDER, sample_order())
        .unwrap()
        .define(&*ORDER_APPROVED)
        .build();

    let order = bind_task(&ORDER, &tasks, "task-1").get().unwrap();
    bind_task(&ORDER_APPROVED, &tasks, "task-1")
        .set(order.positions.len() < 5)
        .unwrap();

    assert!(bind_task(&ORDER_APPROVED, &tasks, "task-1").get().unwrap());
}

#[test]
fn test_fake_rejects_undefined_variable() {
    let tasks = TaskServiceVariableMockBuilder::new().build();

    let err = bind_task(&ORDER_TOTAL, &tasks, "task-1").get().unwrap_err();

    assert!(err.is_backend());
    let source = std::error::Error::source(&err).and_then(|s| s.downcast_ref::<BackendError>());
    assert!(matches!(source, Some(BackendError::UndefinedVariable(name)) if name == "orderTotal"));
}

#[test]
fn test_writer_for_task_on_fake() {
    let tasks = TaskServiceVariableMockBuilder::new()
        .define(&*ORDER_APPROVED)
        .define(&*REMARK)
        .build();

    let writer = writer_for_task(&tasks, "task-1")
        .set(&ORDER_APPROVED, false)
        .unwrap()
        .set(&REMARK, Some("no budget".into()))
        .unwrap();

    assert_eq!(writer.variables().unwrap().len(), 2);
    assert!(writer.variables_local().unwrap().is_empty());
}
