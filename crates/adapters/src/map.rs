//! Adapters over a free-standing [`VariableMap`]

use crate::adapter::{ReadAdapter, VariableAdapter, WriteAdapter};
use bpmdata_core::{BackendKind, Result, Value, VariableDescriptor, VariableMap, VariableValue};

/// Read+write adapter over a mutable map
#[derive(Debug)]
pub struct VariableMapAdapter<'a, T> {
    descriptor: &'a VariableDescriptor<T>,
    map: &'a mut VariableMap,
}

/// Read-only adapter over a shared map
#[derive(Debug)]
pub struct VariableMapReader<'a, T> {
    descriptor: &'a VariableDescriptor<T>,
    map: &'a VariableMap,
}

/// Bind `descriptor` to a map for reading and writing
pub fn bind_map<'a, T: VariableValue>(
    descriptor: &'a VariableDescriptor<T>,
    map: &'a mut VariableMap,
) -> VariableMapAdapter<'a, T> {
    VariableMapAdapter { descriptor, map }
}

/// Bind `descriptor` to a map for reading only
pub fn read_map<'a, T: VariableValue>(
    descriptor: &'a VariableDescriptor<T>,
    map: &'a VariableMap,
) -> VariableMapReader<'a, T> {
    VariableMapReader { descriptor, map }
}

impl<T: VariableValue> VariableAdapter<T> for VariableMapAdapter<'_, T> {
    fn descriptor(&self) -> &VariableDescriptor<T> {
        self.descriptor
    }

    fn backend_kind(&self) -> BackendKind {
        BackendKind::VariableMap
    }
}

impl<T: VariableValue> ReadAdapter<T> for VariableMapAdapter<'_, T> {
    fn read_value(&self) -> Result<Option<Value>> {
        Ok(self.map.get(self.descriptor.name()).cloned())
    }
}

impl<T: VariableValue> WriteAdapter<T> for VariableMapAdapter<'_, T> {
    fn write_value(&mut self, value: Value) -> Result<()> {
        self.map.insert(self.descriptor.name(), value);
        Ok(())
    }

    fn delete_value(&mut self) -> Result<()> {
        self.map.remove(self.descriptor.name());
        Ok(())
    }
}

impl<T: VariableValue> VariableAdapter<T> for VariableMapReader<'_, T> {
    fn descriptor(&self) -> &VariableDescriptor<T> {
        self.descriptor
    }

    fn backend_kind(&self) -> BackendKind {
        BackendKind::VariableMap
    }
}

impl<T: VariableValue> ReadAdapter<T> for VariableMapReader<'_, T> {
    fn read_value(&self) -> Result<Option<Value>> {
        Ok(self.map.get(self.descriptor.name()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let amount = VariableDescriptor::<i64>::new("amount");
        let mut vars = VariableMap::new();

        bind_map(&amount, &mut vars).set(42).unwrap();

        assert_eq!(read_map(&amount, &vars).get().unwrap(), 42);
    }

    #[test]
    fn test_missing_non_nullable() {
        let amount = VariableDescriptor::<i64>::new("amount");
        let vars = VariableMap::new();

        let err = read_map(&amount, &vars).get().unwrap_err();
        assert!(err.is_missing());
        assert_eq!(err.backend_kind(), BackendKind::VariableMap);
    }

    #[test]
    fn test_missing_nullable_is_none() {
        let comment = VariableDescriptor::<Option<String>>::new("comment");
        let vars = VariableMap::new();

        assert_eq!(read_map(&comment, &vars).get().unwrap(), None);
    }

    #[test]
    fn test_null_placeholder_reads_as_absent() {
        let comment = VariableDescriptor::<Option<String>>::new("comment");
        let amount = VariableDescriptor::<i64>::new("comment");
        let mut vars = VariableMap::new();
        vars.insert("comment", Value::Null);

        assert_eq!(read_map(&comment, &vars).get().unwrap(), None);
        assert!(read_map(&amount, &vars).get().unwrap_err().is_missing());
        assert!(!read_map(&amount, &vars).exists().unwrap());
    }

    #[test]
    fn test_none_write_removes_entry() {
        let comment = VariableDescriptor::<Option<String>>::new("comment");
        let mut vars = VariableMap::new();

        bind_map(&comment, &mut vars).set(Some("hi".into())).unwrap();
        assert!(vars.contains("comment"));

        bind_map(&comment, &mut vars).set(None).unwrap();
        assert!(!vars.contains("comment"));
    }

    #[test]
    fn test_type_mismatch_not_coerced() {
        let total = VariableDescriptor::<f64>::new("total");
        let mut vars = VariableMap::new();
        vars.insert("total", Value::Int(6));

        let err = read_map(&total, &vars).get().unwrap_err();
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn test_get_optional_still_reports_mismatch() {
        let total = VariableDescriptor::<f64>::new("total");
        let mut vars = VariableMap::new();
        vars.insert("total", Value::from("6.48"));

        assert!(read_map(&total, &vars).get_optional().is_err());
    }

    #[test]
    fn test_defaults() {
        let retries = VariableDescriptor::<i32>::new("retries");
        let vars = VariableMap::new();

        assert_eq!(read_map(&retries, &vars).get_or_default(3).unwrap(), 3);
        assert_eq!(read_map(&retries, &vars).get_or_else(|| 5).unwrap(), 5);
    }

    #[test]
    fn test_update() {
        let retries = VariableDescriptor::<i32>::new("retries");
        let mut vars = VariableMap::new();

        let err = bind_map(&retries, &mut vars).update(|r| r - 1).unwrap_err();
        assert!(err.is_missing());

        bind_map(&retries, &mut vars).update_or(3, |r| r - 1).unwrap();
        bind_map(&retries, &mut vars).update(|r| r - 1).unwrap();
        assert_eq!(read_map(&retries, &vars).get().unwrap(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let retries = VariableDescriptor::<i32>::new("retries");
        let mut vars = VariableMap::new();
        bind_map(&retries, &mut vars).remove().unwrap();
        assert!(vars.is_empty());
    }
}
