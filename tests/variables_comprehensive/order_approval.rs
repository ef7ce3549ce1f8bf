//! Order approval: start, load, calculate, approve
//!
//! Each step touches the variables the way the matching piece of a real
//! process would: the starter through a builder, delegates through their
//! execution scope, the approver through the task service.

use crate::*;
use bpmdata::{BackendKind, DelegateExecution};

fn load_order(execution: &mut DelegateExecution<'_>) -> bpmdata::Result<()> {
    let order_id = bind_scope(&ORDER_ID, execution).get()?;
    let mut order = sample_order();
    order.order_id = order_id;
    bind_scope(&ORDER, execution).set(order)
}

fn calculate_total(execution: &mut DelegateExecution<'_>) -> bpmdata::Result<()> {
    let order = bind_scope(&ORDER, execution).get()?;
    let total: f64 = order
        .positions
        .iter()
        .map(|p| p.net_cost * p.amount as f64)
        .sum();
    bind_scope(&ORDER_TOTAL, execution).set((total * 100.0).round() / 100.0)
}

// =============================================================================
// Scenario
// =============================================================================

#[test]
fn test_start_load_and_calculate() {
    init_tracing();
    let (engine, execution) = started(builder().set(&ORDER_ID, "1".into()).unwrap().build());

    let mut delegate = engine.delegate_execution(&execution).unwrap();
    load_order(&mut delegate).unwrap();
    calculate_total(&mut delegate).unwrap();

    assert_eq!(bind_execution(&ORDER, &engine, &execution).get().unwrap(), sample_order());
    assert_eq!(bind_execution(&ORDER_TOTAL, &engine, &execution).get().unwrap(), 6.48);
}

#[test]
fn test_approver_decision_reaches_process() {
    init_tracing();
    let (engine, execution) = started(builder().set(&ORDER_ID, "1".into()).unwrap().build());
    let task = engine.create_task(&execution).unwrap();

    engine
        .complete_task(&task, builder().set(&ORDER_APPROVED, true).unwrap().build())
        .unwrap();

    assert!(bind_execution(&ORDER_APPROVED, &engine, &execution).get().unwrap());
}

#[test]
fn test_rejection_with_remark() {
    init_tracing();
    let (engine, execution) = started(builder().set(&ORDER_ID, "1".into()).unwrap().build());
    let task = engine.create_task(&execution).unwrap();

    writer_for_task(&engine, &task)
        .set(&ORDER_APPROVED, false)
        .unwrap()
        .set(&REMARK, Some("too expensive".into()))
        .unwrap();

    assert!(!bind_execution(&ORDER_APPROVED, &engine, &execution).get().unwrap());
    assert_eq!(
        bind_execution(&REMARK, &engine, &execution).get().unwrap().as_deref(),
        Some("too expensive")
    );
}

#[test]
fn test_worker_sees_snapshot_taken_at_lock() {
    init_tracing();
    let (engine, execution) = started(builder().set(&ORDER_ID, "1".into()).unwrap().build());
    let mut delegate = engine.delegate_execution(&execution).unwrap();
    load_order(&mut delegate).unwrap();

    let locked = engine
        .lock_external_task(&execution, "calculate-total", "worker-1")
        .unwrap();
    calculate_total(&mut delegate).unwrap();

    assert_eq!(bind_snapshot(&ORDER, &locked).get().unwrap().positions.len(), 2);
    assert!(bind_snapshot(&ORDER_TOTAL, &locked).get().unwrap_err().is_missing());
    assert_eq!(locked.topic_name(), "calculate-total");
}

#[test]
fn test_missing_order_id_fails_load() {
    init_tracing();
    let (engine, execution) = started(VariableMap::new());
    let mut delegate = engine.delegate_execution(&execution).unwrap();

    let err = load_order(&mut delegate).unwrap_err();

    assert!(err.is_missing());
    assert_eq!(err.variable_name(), "orderId");
    assert_eq!(err.backend_kind(), BackendKind::VariableScope);
}
