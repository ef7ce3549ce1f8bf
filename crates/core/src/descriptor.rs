//! Typed variable descriptors
//!
//! A [`VariableDescriptor<T>`] is the only thing client code needs to name a
//! variable: it carries the variable's name and a runtime [`TypeTag`] for
//! `T`. It never holds a backend; binding to a store happens in the
//! adapter layer, one free function per backend kind.
//!
//! ## Phantom typing
//!
//! The descriptor holds no `T`. The compiler uses the parameter to make
//! every adapter bound to it produce and accept exactly `T`; the runtime
//! tag makes two descriptors with the same name but different types
//! compare unequal.

use crate::convert::VariableValue;
use std::any::TypeId;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Runtime token identifying a descriptor's value type
///
/// Compared by `TypeId`; the name is carried for diagnostics only.
#[derive(Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Tag for `T`
    pub fn of<T: VariableValue>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: T::type_name(),
        }
    }

    /// Human-readable type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether this tag identifies `T`
    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Immutable, typed handle to a named variable
///
/// Two descriptors are equal iff their names and value types are equal.
/// Descriptors of different `T` can be compared and are never equal.
///
/// # Examples
///
/// ```
/// use bpmdata_core::VariableDescriptor;
///
/// let a = VariableDescriptor::<String>::new("orderId");
/// let b = VariableDescriptor::<String>::new("orderId");
/// let c = VariableDescriptor::<i64>::new("orderId");
///
/// assert_eq!(a, b);
/// assert!(a != c);
/// ```
pub struct VariableDescriptor<T> {
    name: String,
    value_type: TypeTag,
    _marker: PhantomData<fn() -> T>,
}

impl<T: VariableValue> VariableDescriptor<T> {
    /// Create a descriptor for a variable called `name` holding a `T`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_type: TypeTag::of::<T>(),
            _marker: PhantomData,
        }
    }

    /// Nullable descriptor for the same variable
    ///
    /// Reading an absent entry through it yields `None` instead of an error,
    /// and writing `None` removes the entry.
    pub fn optional(&self) -> VariableDescriptor<Option<T>> {
        VariableDescriptor::new(self.name.clone())
    }
}

impl<T> VariableDescriptor<T> {
    /// Name used as the key in every backend
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runtime type tag for `T`
    pub fn value_type(&self) -> TypeTag {
        self.value_type
    }

    /// Type-erased identity, for collections of mixed descriptors
    pub fn key(&self) -> DescriptorKey {
        DescriptorKey {
            name: self.name.clone(),
            value_type: self.value_type,
        }
    }
}

impl<T> Clone for VariableDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            value_type: self.value_type,
            _marker: PhantomData,
        }
    }
}

impl<T, U> PartialEq<VariableDescriptor<U>> for VariableDescriptor<T> {
    fn eq(&self, other: &VariableDescriptor<U>) -> bool {
        self.name == other.name && self.value_type == other.value_type
    }
}

impl<T> Eq for VariableDescriptor<T> {}

impl<T> Hash for VariableDescriptor<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.value_type.hash(state);
    }
}

impl<T> std::fmt::Debug for VariableDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariableDescriptor")
            .field("name", &self.name)
            .field("value_type", &self.value_type)
            .finish()
    }
}

impl<T> std::fmt::Display for VariableDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.value_type.name())
    }
}

/// Type-erased descriptor identity
///
/// Hashes and compares exactly like the descriptor it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DescriptorKey {
    name: String,
    value_type: TypeTag,
}

impl DescriptorKey {
    /// Variable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runtime type tag
    pub fn value_type(&self) -> TypeTag {
        self.value_type
    }
}

impl std::fmt::Display for DescriptorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.value_type.name())
    }
}
