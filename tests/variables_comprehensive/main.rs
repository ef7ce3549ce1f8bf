//! Variables Comprehensive Test Suite
//!
//! Exercises typed variable access end to end, through the root crate only,
//! against every backend the in-memory engine and the task service fake
//! provide.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test variables_comprehensive
//!
//! # Run the order approval scenario only
//! cargo test --test variables_comprehensive order_approval::
//! ```
//!
//! Set `RUST_LOG=bpmdata_adapters=trace` to see every adapter access.

use bpmdata::prelude::*;
use bpmdata::serde_variable;
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// Test modules
pub mod backends;
pub mod conversions;
pub mod engine_config;
pub mod mock_task_service;
pub mod order_approval;
pub mod strategies;

// =============================================================================
// SHARED DESCRIPTORS
// =============================================================================

/// Id of the order under approval
pub static ORDER_ID: Lazy<VariableDescriptor<String>> = Lazy::new(|| string_variable("orderId"));

/// Loaded order
pub static ORDER: Lazy<VariableDescriptor<Order>> = Lazy::new(|| custom_variable("order"));

/// Sum over all positions
pub static ORDER_TOTAL: Lazy<VariableDescriptor<f64>> = Lazy::new(|| double_variable("orderTotal"));

/// Approver's decision
pub static ORDER_APPROVED: Lazy<VariableDescriptor<bool>> =
    Lazy::new(|| boolean_variable("orderApproved"));

/// Position currently being processed
pub static ORDER_POSITION: Lazy<VariableDescriptor<OrderPosition>> =
    Lazy::new(|| custom_variable("orderPosition"));

/// Free-text remark, may be absent
pub static REMARK: Lazy<VariableDescriptor<Option<String>>> = Lazy::new(|| optional("remark"));

// =============================================================================
// DOMAIN TYPES
// =============================================================================

/// Order with its positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub created: DateTime<Utc>,
    pub positions: Vec<OrderPosition>,
}

/// One line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPosition {
    pub title: String,
    pub net_cost: f64,
    pub amount: i64,
}

serde_variable!(Order, OrderPosition);

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Install a tracing subscriber honouring `RUST_LOG`, once per process
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The order every scenario works with
pub fn sample_order() -> Order {
    Order {
        order_id: "1".to_string(),
        created: Utc.with_ymd_and_hms(2020, 3, 14, 9, 30, 0).unwrap(),
        positions: vec![
            OrderPosition {
                title: "Pencil".to_string(),
                net_cost: 1.99,
                amount: 3,
            },
            OrderPosition {
                title: "Sheet".to_string(),
                net_cost: 0.17,
                amount: 3,
            },
        ],
    }
}

/// Engine with one started process instance holding `variables`
pub fn started(variables: VariableMap) -> (InMemoryEngine, String) {
    let engine = InMemoryEngine::new();
    let execution = engine.start_process_instance(variables);
    (engine, execution)
}
