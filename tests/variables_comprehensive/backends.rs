//! Same descriptor, every backend
//!
//! A value written through one adapter must read back unchanged through
//! the same kind of adapter, whatever the backend.

use crate::*;
use bpmdata::{BackendKind, CaseService, RuntimeService, TaskService};
use chrono::TimeZone;
use std::collections::BTreeMap;

fn roundtrip_all<T>(descriptor: &VariableDescriptor<T>, value: T)
where
    T: VariableValue + Clone + PartialEq + std::fmt::Debug,
{
    let mut map = VariableMap::new();
    bind_map(descriptor, &mut map).set(value.clone()).unwrap();
    assert_eq!(read_map(descriptor, &map).get().unwrap(), value, "map");

    let mut scope = InMemoryScope::new();
    bind_scope_local(descriptor, &mut scope).set(value.clone()).unwrap();
    assert_eq!(bind_scope_local(descriptor, &mut scope).get().unwrap(), value, "scope");

    let (engine, execution) = started(VariableMap::new());
    bind_execution(descriptor, &engine, &execution).set(value.clone()).unwrap();
    assert_eq!(bind_execution(descriptor, &engine, &execution).get().unwrap(), value, "runtime");

    let task = engine.create_task(&execution).unwrap();
    bind_task_local(descriptor, &engine, &task).set(value.clone()).unwrap();
    assert_eq!(bind_task_local(descriptor, &engine, &task).get().unwrap(), value, "task");

    let case = engine.create_case_execution(VariableMap::new());
    bind_case(descriptor, &engine, &case).set(value.clone()).unwrap();
    assert_eq!(bind_case(descriptor, &engine, &case).get().unwrap(), value, "case");
}

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn test_scalars_roundtrip_everywhere() {
    roundtrip_all(&string_variable("s"), "text".to_string());
    roundtrip_all(&int_variable("i"), -7);
    roundtrip_all(&long_variable("l"), i64::MAX);
    roundtrip_all(&short_variable("h"), i16::MIN);
    roundtrip_all(&double_variable("d"), 0.5);
    roundtrip_all(&boolean_variable("b"), true);
    roundtrip_all(
        &date_variable("created"),
        Utc.with_ymd_and_hms(2021, 1, 2, 3, 4, 5).unwrap(),
    );
}

#[test]
fn test_collections_roundtrip_everywhere() {
    roundtrip_all(&list_variable::<i64>("list"), vec![3, 1, 2]);
    roundtrip_all(
        &set_variable::<String>("set"),
        ["a".to_string(), "b".to_string()].into_iter().collect(),
    );
    let mut map = BTreeMap::new();
    map.insert("pencil".to_string(), 3i64);
    roundtrip_all(&map_variable::<i64>("map"), map);
}

#[test]
fn test_custom_type_roundtrips_everywhere() {
    roundtrip_all(&ORDER, sample_order());
}

// =============================================================================
// Absence and removal
// =============================================================================

#[test]
fn test_none_removes_on_every_backend() {
    let (engine, execution) = started(VariableMap::new());
    let task = engine.create_task(&execution).unwrap();
    let case = engine.create_case_execution(VariableMap::new());

    bind_execution(&REMARK, &engine, &execution).set(Some("x".into())).unwrap();
    bind_execution(&REMARK, &engine, &execution).set(None).unwrap();
    assert!(!engine.has_execution_variable(&execution, Partition::Global, "remark").unwrap());

    bind_task_local(&REMARK, &engine, &task).set(Some("x".into())).unwrap();
    bind_task_local(&REMARK, &engine, &task).set(None).unwrap();
    assert!(!engine.has_task_variable(&task, Partition::Local, "remark").unwrap());

    bind_case(&REMARK, &engine, &case).set(Some("x".into())).unwrap();
    bind_case(&REMARK, &engine, &case).set(None).unwrap();
    assert!(!engine.has_case_variable(&case, "remark").unwrap());
}

#[test]
fn test_null_placeholder_from_raw_writer_reads_as_absent() {
    let engine = InMemoryEngine::builder().null_writes_remove(false).build();
    let execution = engine.start_process_instance(VariableMap::new());
    engine
        .set_execution_variable(&execution, Partition::Global, "remark", Value::Null)
        .unwrap();

    assert_eq!(bind_execution(&REMARK, &engine, &execution).get().unwrap(), None);
    assert!(!bind_execution(&REMARK, &engine, &execution).exists().unwrap());
}

#[test]
fn test_auto_created_entities_accept_writes() {
    let engine = InMemoryEngine::builder().auto_create_entities(true).build();

    bind_task(&ORDER_APPROVED, &engine, "external-task-id").set(true).unwrap();
    bind_case(&ORDER_ID, &engine, "external-case-id").set("1".into()).unwrap();

    assert!(bind_task(&ORDER_APPROVED, &engine, "external-task-id").get().unwrap());
    assert_eq!(bind_case(&ORDER_ID, &engine, "external-case-id").get().unwrap(), "1");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_errors_name_variable_and_backend() {
    let (engine, execution) = started(VariableMap::new());
    engine
        .set_execution_variable(&execution, Partition::Global, "orderTotal", Value::from("6.48"))
        .unwrap();

    let err = bind_execution(&ORDER_TOTAL, &engine, &execution).get().unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(err.variable_name(), "orderTotal");
    assert_eq!(err.backend_kind(), BackendKind::RuntimeService);
    assert!(err.to_string().contains("orderTotal"));

    let err = bind_case(&ORDER_TOTAL, &engine, "missing-case").get().unwrap_err();
    assert!(err.is_backend());
    assert_eq!(err.backend_kind(), BackendKind::CaseService);
}

#[test]
fn test_binding_does_not_touch_backend() {
    let engine = InMemoryEngine::new();

    let adapter = bind_task(&ORDER_APPROVED, &engine, "no-such-task");

    assert_eq!(adapter.name(), "orderApproved");
    assert!(adapter.get().is_err());
}
