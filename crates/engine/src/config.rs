//! Engine configuration
//!
//! [`EngineConfig`] is plain data (loadable from JSON); [`EngineBuilder`] is
//! the fluent way to produce an engine from it.

use crate::engine::InMemoryEngine;
use serde::{Deserialize, Serialize};

/// Behaviour switches for [`InMemoryEngine`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Writes addressed to an unknown task, execution or case execution
    /// create it instead of failing. Reads of unknown ids still fail.
    pub auto_create_entities: bool,

    /// A raw write of `Value::Null` deletes the entry. When disabled the
    /// null is stored as a placeholder, the way some engines do.
    pub null_writes_remove: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            auto_create_entities: false,
            null_writes_remove: true,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Builder for engine configuration.
///
/// # Example
///
/// ```
/// use bpmdata_engine::InMemoryEngine;
///
/// let engine = InMemoryEngine::builder()
///     .auto_create_entities(true)
///     .build();
/// assert!(engine.config().auto_create_entities);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create unknown entities on write instead of failing.
    pub fn auto_create_entities(mut self, enabled: bool) -> Self {
        self.config.auto_create_entities = enabled;
        self
    }

    /// Choose whether raw null writes delete the entry.
    pub fn null_writes_remove(mut self, enabled: bool) -> Self {
        self.config.null_writes_remove = enabled;
        self
    }

    /// Build the engine.
    pub fn build(self) -> InMemoryEngine {
        InMemoryEngine::with_config(self.config)
    }
}
