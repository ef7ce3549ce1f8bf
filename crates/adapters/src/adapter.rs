//! Read and write capabilities
//!
//! Every backend adapter implements [`VariableAdapter`] plus one or both of
//! [`ReadAdapter`] and [`WriteAdapter`]. Adapters only supply raw access
//! to the untyped store; conversion, absence handling and the
//! remove-on-null rule live here, once, for all backends.
//!
//! ## Read semantics
//!
//! | Stored | `T` non-nullable | `T = Option<U>` |
//! |--------|------------------|-----------------|
//! | absent | `MissingVariable` | `None` |
//! | `Null` placeholder | `MissingVariable` | `None` |
//! | convertible | value | `Some(value)` |
//! | not convertible | `TypeMismatch` | `TypeMismatch` |
//!
//! ## Write semantics
//!
//! A value that converts to `Value::Null` (i.e. `None` for an `Option`
//! descriptor) removes the entry instead of storing a null.

use bpmdata_core::{BackendKind, Result, Value, VariableDescriptor, VariableError, VariableValue};
use tracing::trace;

/// A descriptor bound to one backend instance
pub trait VariableAdapter<T: VariableValue> {
    /// The bound descriptor
    fn descriptor(&self) -> &VariableDescriptor<T>;

    /// Kind of backend this adapter talks to
    fn backend_kind(&self) -> BackendKind;

    /// Name of the bound variable
    fn name(&self) -> &str {
        self.descriptor().name()
    }
}

/// Can produce a `T` from the bound store
pub trait ReadAdapter<T: VariableValue>: VariableAdapter<T> {
    /// Raw untyped entry, with backend errors already tagged
    fn read_value(&self) -> Result<Option<Value>>;

    /// Read and convert the variable.
    ///
    /// Absence is an error unless `T` is nullable.
    fn get(&self) -> Result<T> {
        match self.get_optional()? {
            Some(value) => Ok(value),
            None => T::absent().ok_or_else(|| VariableError::missing(self.name(), self.backend_kind())),
        }
    }

    /// Read and convert the variable, mapping absence to `None`.
    ///
    /// A stored value of the wrong type is still an error.
    fn get_optional(&self) -> Result<Option<T>> {
        let raw = self.read_value()?;
        trace!(variable = self.name(), backend = %self.backend_kind(), present = raw.is_some(), "read");
        match raw {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::from_value(&value)
                .map(Some)
                .map_err(|e| VariableError::mismatch(self.name(), self.backend_kind(), e)),
        }
    }

    /// Read the variable, falling back to `default` when absent
    fn get_or_default(&self, default: T) -> Result<T> {
        Ok(self.get_optional()?.unwrap_or(default))
    }

    /// Read the variable, computing a fallback when absent
    fn get_or_else(&self, fallback: impl FnOnce() -> T) -> Result<T>
    where
        Self: Sized,
    {
        Ok(self.get_optional()?.unwrap_or_else(fallback))
    }

    /// Check whether the store holds a non-null entry, without converting it
    fn exists(&self) -> Result<bool> {
        Ok(matches!(self.read_value()?, Some(v) if !v.is_null()))
    }
}

/// Can store a `T` into (or clear it from) the bound store
pub trait WriteAdapter<T: VariableValue>: VariableAdapter<T> {
    /// Store a raw, non-null value
    fn write_value(&mut self, value: Value) -> Result<()>;

    /// Delete the raw entry
    fn delete_value(&mut self) -> Result<()>;

    /// Delete the entry; deleting an absent entry is a no-op
    fn remove(&mut self) -> Result<()> {
        trace!(variable = self.name(), backend = %self.backend_kind(), "remove");
        self.delete_value()
    }

    /// Convert and store `value`, overwriting any previous entry.
    ///
    /// A value converting to null removes the entry.
    fn set(&mut self, value: T) -> Result<()> {
        let raw = value
            .into_value()
            .map_err(|e| VariableError::mismatch(self.name(), self.backend_kind(), e))?;
        if raw.is_null() {
            trace!(variable = self.name(), backend = %self.backend_kind(), "null write removes");
            return self.delete_value();
        }
        trace!(variable = self.name(), backend = %self.backend_kind(), kind = raw.type_name(), "write");
        self.write_value(raw)
    }

    /// Read, transform and write back.
    ///
    /// A missing non-nullable variable fails with `MissingVariable` and
    /// nothing is written.
    fn update(&mut self, f: impl FnOnce(T) -> T) -> Result<()>
    where
        Self: ReadAdapter<T> + Sized,
    {
        let current = self.get()?;
        self.set(f(current))
    }

    /// Like [`WriteAdapter::update`], starting from `default` when absent
    fn update_or(&mut self, default: T, f: impl FnOnce(T) -> T) -> Result<()>
    where
        Self: ReadAdapter<T> + Sized,
    {
        let current = self.get_or_default(default)?;
        self.set(f(current))
    }
}
