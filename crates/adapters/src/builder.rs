//! Typed construction of a fresh [`VariableMap`]

use crate::adapter::WriteAdapter;
use crate::map::bind_map;
use bpmdata_core::{Result, VariableDescriptor, VariableMap, VariableValue};

/// Builds a [`VariableMap`] one typed entry at a time
///
/// ```
/// use bpmdata_adapters::VariableMapBuilder;
/// use bpmdata_core::VariableDescriptor;
///
/// let order_id = VariableDescriptor::<String>::new("orderId");
/// let approved = VariableDescriptor::<bool>::new("approved");
///
/// let vars = VariableMapBuilder::new()
///     .set(&order_id, "1".to_string())?
///     .set(&approved, true)?
///     .build();
/// assert_eq!(vars.len(), 2);
/// # Ok::<(), bpmdata_core::VariableError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct VariableMapBuilder {
    variables: VariableMap,
}

impl VariableMapBuilder {
    /// Start from an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a copy of existing variables
    pub fn from_variables(variables: VariableMap) -> Self {
        Self { variables }
    }

    /// Set `descriptor` to `value`
    pub fn set<T: VariableValue>(mut self, descriptor: &VariableDescriptor<T>, value: T) -> Result<Self> {
        bind_map(descriptor, &mut self.variables).set(value)?;
        Ok(self)
    }

    /// Drop the entry for `descriptor`
    pub fn remove<T: VariableValue>(mut self, descriptor: &VariableDescriptor<T>) -> Self {
        self.variables.remove(descriptor.name());
        self
    }

    /// Finish and return the map
    pub fn build(self) -> VariableMap {
        self.variables
    }
}
