use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Start with quadrant tips visible
    #[serde(default)]
    pub show_tips: bool,
    /// Hex color overrides keyed by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Delay before success and completion messages clear themselves
    #[serde(default = "default_status_clear_ms")]
    pub status_clear_ms: u64,
    /// Delay before the tips toggle message clears itself
    #[serde(default = "default_tips_clear_ms")]
    pub tips_clear_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            status_clear_ms: default_status_clear_ms(),
            tips_clear_ms: default_tips_clear_ms(),
        }
    }
}

impl TimingConfig {
    pub fn status_clear(&self) -> Duration {
        Duration::from_millis(self.status_clear_ms)
    }

    pub fn tips_clear(&self) -> Duration {
        Duration::from_millis(self.tips_clear_ms)
    }
}

fn default_status_clear_ms() -> u64 {
    3000
}

fn default_tips_clear_ms() -> u64 {
    1000
}
