//! Backend contracts
//!
//! The engine owns the variable stores; this module only names the
//! operations adapters need from them. Every store is untyped: it speaks
//! [`crate::Value`], and typing happens in the adapter layer.
//!
//! | Contract | Addressing | Partition | Access |
//! |----------|------------|-----------|--------|
//! | [`VariableScope`] | the scope itself | global / local | read + write |
//! | [`TaskService`] | task id | global / local | read + write |
//! | [`RuntimeService`] | execution id | global / local | read + write |
//! | [`CaseService`] | case execution id | none | read + write |
//! | [`VariableSnapshot`] | the snapshot itself | none | read only |
//!
//! The free-standing [`crate::VariableMap`] needs no contract; adapters
//! use it directly.

mod backend;

pub use backend::{CaseService, RuntimeService, TaskService, VariableScope, VariableSnapshot};
