//! Configuration for content generation

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the content generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Model name recorded in generation metadata
    pub model_name: String,

    /// Maximum prompt length (characters)
    pub max_prompt_length: usize,

    /// Maximum time for a single completion call (seconds)
    pub completion_timeout_secs: u64,

    /// Maximum context items (existing postings, profile lines) per prompt
    pub context_items_limit: usize,
}

impl GeneratorConfig {
    /// Get the completion timeout as a Duration
    pub fn completion_timeout(&self) -> Duration {
        Duration::from_secs(self.completion_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model_name.is_empty() {
            return Err("model_name must not be empty".to_string());
        }
        if self.max_prompt_length == 0 {
            return Err("max_prompt_length must be greater than 0".to_string());
        }
        if self.completion_timeout_secs == 0 {
            return Err("completion_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            model_name: "gpt-4o-mini".to_string(),
            max_prompt_length: 12_000,
            completion_timeout_secs: 30,
            context_items_limit: 20,
        }
    }
}

impl GeneratorConfig {
    /// Fast preset: shorter timeout, tighter prompts for interactive callers
    pub fn fast() -> Self {
        Self {
            model_name: "gpt-4o-mini".to_string(),
            max_prompt_length: 6_000,
            completion_timeout_secs: 10,
            context_items_limit: 10,
        }
    }

    /// Thorough preset: longer timeout, larger prompts for batch drafting
    pub fn thorough() -> Self {
        Self {
            model_name: "gpt-4o".to_string(),
            max_prompt_length: 24_000,
            completion_timeout_secs: 90,
            context_items_limit: 50,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
