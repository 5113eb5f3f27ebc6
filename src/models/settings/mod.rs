// Application settings model
// Persisted as TOML by services::settings

use serde::{Deserialize, Serialize};

use crate::models::params::RunParameters;

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";

/// User-facing application settings.
///
/// `theme` is stored as a string ("light", "dark" or "system") so the file
/// stays hand-editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Base URL of the optimization service.
    pub service_url: String,
    pub theme: String,
    /// Last-used run parameters, restored into the form on startup.
    pub parameters: RunParameters,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            theme: "system".to_string(),
            parameters: RunParameters::default(),
        }
    }
}
