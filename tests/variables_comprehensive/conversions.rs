//! Descriptor identity and value conversion through the public API

use crate::*;
use bpmdata::{Bytes, DescriptorKey};
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn test_descriptor_identity() {
    let a = string_variable("orderId");
    let b = string_variable("orderId");
    let c = optional::<String>("orderId");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a, *ORDER_ID);

    let keys: HashSet<DescriptorKey> = [a.key(), b.key(), c.key()].into_iter().collect();
    assert_eq!(keys.len(), 2);
    assert_eq!(ORDER_ID.to_string(), format!("orderId: {}", ORDER_ID.value_type().name()));
}

#[test]
fn test_optional_descriptor_from_existing() {
    let remark = string_variable("remark").optional();
    let vars = VariableMap::new();

    assert_eq!(read_map(&remark, &vars).get().unwrap(), None);
    assert_eq!(remark, *REMARK);
}

#[test]
fn test_no_numeric_coercion() {
    let mut vars = VariableMap::new();
    bind_map(&long_variable("n"), &mut vars).set(1).unwrap();

    assert!(read_map(&double_variable("n"), &vars).get().unwrap_err().is_type_mismatch());
    assert!(read_map(&string_variable("n"), &vars).get().unwrap_err().is_type_mismatch());
}

#[test]
fn test_narrow_integer_out_of_range_is_mismatch() {
    let mut vars = VariableMap::new();
    bind_map(&long_variable("n"), &mut vars).set(i64::from(i32::MAX) + 1).unwrap();

    assert!(read_map(&int_variable("n"), &vars).get().unwrap_err().is_type_mismatch());
    assert!(read_map(&short_variable("n"), &vars).get().unwrap_err().is_type_mismatch());
}

#[test]
fn test_custom_type_mismatch() {
    let position_under_order_name = custom_variable::<OrderPosition>("order");
    let mut vars = VariableMap::new();
    bind_map(&position_under_order_name, &mut vars)
        .set(sample_order().positions[0].clone())
        .unwrap();

    let err = read_map(&ORDER, &vars).get().unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(
        read_map(&position_under_order_name, &vars).get().unwrap(),
        sample_order().positions[0]
    );
    assert!(read_map(&ORDER_POSITION, &vars).get_optional().unwrap().is_none());
}

#[test]
fn test_bytes_variable() {
    let blob = custom_variable::<Bytes>("blob");
    let mut vars = VariableMap::new();

    bind_map(&blob, &mut vars).set(Bytes(vec![0, 255, 7])).unwrap();

    assert_eq!(read_map(&blob, &vars).get().unwrap(), Bytes(vec![0, 255, 7]));
}

proptest! {
    #[test]
    fn string_values_roundtrip(s in ".*") {
        let mut vars = VariableMap::new();
        bind_map(&*ORDER_ID, &mut vars).set(s.clone()).unwrap();
        prop_assert_eq!(read_map(&*ORDER_ID, &vars).get().unwrap(), s);
    }

    #[test]
    fn list_values_roundtrip(items in prop::collection::vec(any::<i64>(), 0..8)) {
        let numbers = list_variable::<i64>("numbers");
        let mut vars = VariableMap::new();
        bind_map(&numbers, &mut vars).set(items.clone()).unwrap();
        prop_assert_eq!(read_map(&numbers, &vars).get().unwrap(), items);
    }

    #[test]
    fn equality_follows_name(a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
        prop_assert_eq!(string_variable(a.clone()) == string_variable(b.clone()), a == b);
    }
}
