//! Core types shared by every backend
//!
//! This module defines the fundamental types used throughout the system:
//! - [`VariableMap`]: the untyped name → value store
//! - [`Partition`]: global vs. local half of a dual-scope backend
//! - [`BackendKind`]: which kind of backend an adapter is bound to

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Untyped, string-keyed variable store
///
/// Iteration is ordered by name, so a batch applied from a `VariableMap`
/// is applied in a deterministic order.
///
/// # Examples
///
/// ```
/// use bpmdata_core::{Value, VariableMap};
///
/// let mut vars = VariableMap::new();
/// vars.insert("orderId", Value::from("1"));
/// assert!(vars.contains("orderId"));
/// assert_eq!(vars.get("orderId"), Some(&Value::from("1")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableMap(BTreeMap<String, Value>);

impl VariableMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Get the raw value stored under `name`
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Store `value` under `name`, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(name.into(), value)
    }

    /// Remove the entry under `name`, returning it if present
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    /// Check whether an entry exists under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Names of all entries, in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over all entries, in name order
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Keep only the entries for which `keep` returns true
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &Value) -> bool) {
        self.0.retain(|k, v| keep(k, v));
    }

    /// Copy of the entries whose names are in `names`
    pub fn filter_names<S: AsRef<str>>(&self, names: &[S]) -> VariableMap {
        names
            .iter()
            .filter_map(|n| {
                let n = n.as_ref();
                self.0.get(n).map(|v| (n.to_string(), v.clone()))
            })
            .collect()
    }
}

impl FromIterator<(String, Value)> for VariableMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, Value)> for VariableMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

impl Extend<(String, Value)> for VariableMap {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for VariableMap {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a VariableMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<BTreeMap<String, Value>> for VariableMap {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

/// Half of a dual-scope backend
///
/// `Global` is the outer scope shared by the whole process instance;
/// `Local` belongs to one execution or task. The two never alias: a write
/// to one is not observable through the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Partition {
    /// Outer, process-instance-wide variables
    #[default]
    Global,
    /// Variables owned by a single execution or task
    Local,
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Partition::Global => f.write_str("global"),
            Partition::Local => f.write_str("local"),
        }
    }
}

/// The kind of backend an adapter talks to
///
/// Carried in every error so a failure can be traced to the store it came
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackendKind {
    /// Free-standing variable map
    VariableMap,
    /// Live execution scope (delegate execution or task)
    VariableScope,
    /// Running user task, addressed through the task service
    TaskService,
    /// Process execution, addressed through the runtime service
    RuntimeService,
    /// Case execution, addressed through the case service
    CaseService,
    /// Read-only snapshot of a locked external task
    ExternalTask,
}

impl BackendKind {
    /// All backend kinds (for iteration)
    pub const ALL: [BackendKind; 6] = [
        BackendKind::VariableMap,
        BackendKind::VariableScope,
        BackendKind::TaskService,
        BackendKind::RuntimeService,
        BackendKind::CaseService,
        BackendKind::ExternalTask,
    ];

    /// Human-readable display name
    pub const fn name(&self) -> &'static str {
        match self {
            BackendKind::VariableMap => "VariableMap",
            BackendKind::VariableScope => "VariableScope",
            BackendKind::TaskService => "TaskService",
            BackendKind::RuntimeService => "RuntimeService",
            BackendKind::CaseService => "CaseService",
            BackendKind::ExternalTask => "ExternalTask",
        }
    }

    /// Whether adapters for this backend can write
    pub const fn is_writable(&self) -> bool {
        !matches!(self, BackendKind::ExternalTask)
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
