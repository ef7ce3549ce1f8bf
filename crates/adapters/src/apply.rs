//! Strategies for applying a computed batch of variables to a scope
//!
//! A strategy is a stateless policy: one value can be reused for any
//! number of scopes. Both strategies here only touch the global partition.

use bpmdata_core::{BackendKind, Partition, Result, VariableError, VariableMap, VariableScope};
use std::fmt;
use tracing::debug;

/// Policy for applying a batch of variables to a scope
pub trait ValueApplicationStrategy: fmt::Display {
    /// Apply `variables` to `scope` and hand the scope back for chaining
    fn apply<'s, S: VariableScope + ?Sized>(
        &self,
        variables: VariableMap,
        scope: &'s mut S,
    ) -> Result<&'s mut S>;
}

/// Afterwards the global partition holds exactly the batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GlobalScopeReplaceStrategy;

/// Batch entries overwrite same-named globals, everything else is kept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GlobalScopeMergeStrategy;

fn write_all<S: VariableScope + ?Sized>(variables: VariableMap, scope: &mut S) -> Result<usize> {
    let mut written = 0;
    for (name, value) in variables {
        let outcome = if value.is_null() {
            scope.remove_variable(Partition::Global, &name)
        } else {
            scope.set_variable(Partition::Global, &name, value)
        };
        outcome.map_err(|e| VariableError::backend(name.as_str(), BackendKind::VariableScope, e))?;
        written += 1;
    }
    Ok(written)
}

impl ValueApplicationStrategy for GlobalScopeReplaceStrategy {
    fn apply<'s, S: VariableScope + ?Sized>(
        &self,
        variables: VariableMap,
        scope: &'s mut S,
    ) -> Result<&'s mut S> {
        let existing = scope
            .variables(Partition::Global)
            .map_err(|e| VariableError::backend("*", BackendKind::VariableScope, e))?;

        let mut removed = 0;
        for name in existing.names() {
            if !variables.contains(name) {
                scope
                    .remove_variable(Partition::Global, name)
                    .map_err(|e| VariableError::backend(name, BackendKind::VariableScope, e))?;
                removed += 1;
            }
        }
        let written = write_all(variables, scope)?;

        debug!(strategy = %self, written, removed, "applied variables");
        Ok(scope)
    }
}

impl ValueApplicationStrategy for GlobalScopeMergeStrategy {
    fn apply<'s, S: VariableScope + ?Sized>(
        &self,
        variables: VariableMap,
        scope: &'s mut S,
    ) -> Result<&'s mut S> {
        let written = write_all(variables, scope)?;

        debug!(strategy = %self, written, "applied variables");
        Ok(scope)
    }
}

impl fmt::Display for GlobalScopeReplaceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("global-scope-replace")
    }
}

impl fmt::Display for GlobalScopeMergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("global-scope-merge")
    }
}
