//! Engine behaviour switches loaded from JSON configuration

use crate::*;
use bpmdata::EngineConfig;
use serde_json::json;

fn engine_from(config: serde_json::Value) -> InMemoryEngine {
    init_tracing();
    let config = EngineConfig::from_json(&config.to_string()).unwrap();
    tracing::info!(?config, "building engine");
    InMemoryEngine::with_config(config)
}

#[test]
fn test_empty_config_uses_defaults() {
    let engine = engine_from(json!({}));

    assert!(!engine.config().auto_create_entities);
    assert!(engine.config().null_writes_remove);
}

#[test]
fn test_auto_create_writes_to_unknown_ids() {
    let engine = engine_from(json!({ "auto_create_entities": true }));

    bind_execution(&ORDER_ID, &engine, "exec-from-elsewhere")
        .set("1".to_string())
        .unwrap();
    bind_task(&ORDER_APPROVED, &engine, "task-from-elsewhere")
        .set(true)
        .unwrap();
    bind_case(&ORDER_TOTAL, &engine, "case-from-elsewhere")
        .set(6.48)
        .unwrap();

    assert_eq!(bind_execution(&ORDER_ID, &engine, "exec-from-elsewhere").get().unwrap(), "1");
    assert!(bind_task(&ORDER_APPROVED, &engine, "task-from-elsewhere").get().unwrap());
    assert_eq!(bind_case(&ORDER_TOTAL, &engine, "case-from-elsewhere").get().unwrap(), 6.48);
}

#[test]
fn test_without_auto_create_unknown_ids_fail() {
    let engine = engine_from(json!({ "auto_create_entities": false }));

    let err = bind_execution(&ORDER_ID, &engine, "exec-from-elsewhere")
        .set("1".to_string())
        .unwrap_err();
    assert!(err.is_backend());
    assert!(engine.case_variables("case-from-elsewhere").is_err());
}

#[test]
fn test_kept_null_reads_as_absent() {
    let engine = engine_from(json!({ "null_writes_remove": false }));
    let execution = engine.start_process_instance(VariableMap::new());

    engine
        .set_execution_variable(&execution, Partition::Global, "remark", Value::Null)
        .unwrap();

    let stored = engine
        .execution_variables(&execution, Partition::Global)
        .unwrap();
    assert_eq!(stored.get("remark"), Some(&Value::Null));
    assert_eq!(bind_execution(&REMARK, &engine, &execution).get().unwrap(), None);
    assert!(!bind_execution(&REMARK, &engine, &execution).exists().unwrap());
}
