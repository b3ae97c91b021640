//! Session configuration
//!
//! Only pacing and seeding are configurable. Board size and the spawn rule
//! are compile-time constants in [`crate::types`].

use serde::{Deserialize, Serialize};

use crate::types::GRAVITY_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Milliseconds between gravity ticks. Only the embedder's clock reads this.
    pub gravity_ms: u32,
    /// Seed for piece selection; `None` picks one at random
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Check values the session cannot run with
    pub fn validate(&self) -> Result<(), String> {
        if self.gravity_ms == 0 {
            return Err("gravity_ms must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            gravity_ms: GRAVITY_MS,
            seed: None,
        }
    }
}
