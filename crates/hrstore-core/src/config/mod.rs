pub mod logging_config;
pub mod store_config;

use serde::{Deserialize, Serialize};

pub use logging_config::LoggingConfig;
pub use store_config::StoreConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HrConfig {
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

impl HrConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}
