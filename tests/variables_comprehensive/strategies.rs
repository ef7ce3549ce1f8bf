//! Batch application through the root crate

use crate::*;

fn batch() -> VariableMap {
    builder()
        .set(&ORDER_ID, "2".into())
        .unwrap()
        .set(&ORDER_APPROVED, true)
        .unwrap()
        .build()
}

#[test]
fn test_replace_on_delegate_execution() {
    init_tracing();
    let (engine, execution) = started(
        builder()
            .set(&ORDER_ID, "1".into())
            .unwrap()
            .set(&ORDER_TOTAL, 6.48)
            .unwrap()
            .build(),
    );
    let mut delegate = engine.delegate_execution(&execution).unwrap();

    GlobalScopeReplaceStrategy.apply(batch(), &mut delegate).unwrap();

    assert_eq!(bind_execution(&ORDER_ID, &engine, &execution).get().unwrap(), "2");
    assert!(bind_execution(&ORDER_TOTAL, &engine, &execution)
        .get_optional()
        .unwrap()
        .is_none());
}

#[test]
fn test_merge_on_delegate_execution() {
    init_tracing();
    let (engine, execution) = started(builder().set(&ORDER_TOTAL, 6.48).unwrap().build());
    let mut delegate = engine.delegate_execution(&execution).unwrap();

    GlobalScopeMergeStrategy.apply(batch(), &mut delegate).unwrap();

    assert_eq!(bind_execution(&ORDER_TOTAL, &engine, &execution).get().unwrap(), 6.48);
    assert!(bind_execution(&ORDER_APPROVED, &engine, &execution).get().unwrap());
}

#[test]
fn test_strategies_are_reusable() {
    let strategy = GlobalScopeMergeStrategy;
    let mut first = InMemoryScope::new();
    let mut second = InMemoryScope::new();

    strategy.apply(batch(), &mut first).unwrap();
    strategy.apply(batch(), &mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_strategy_then_typed_write_via_returned_scope() {
    let mut scope = InMemoryScope::new();

    let scope_ref = GlobalScopeReplaceStrategy.apply(batch(), &mut scope).unwrap();
    bind_scope(&ORDER_TOTAL, scope_ref).set(1.0).unwrap();

    assert_eq!(scope.global().len(), 3);
}
