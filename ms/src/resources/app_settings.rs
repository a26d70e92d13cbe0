//! config://app/settings - the application settings document

use async_trait::async_trait;

use crate::config::AppSettings;
use crate::protocol::ServerError;

use super::Resource;

pub const APP_SETTINGS_URI: &str = "config://app/settings";

/// Serves the configured `AppSettings` as JSON
pub struct AppSettingsResource {
    settings: AppSettings,
}

impl AppSettingsResource {
    pub fn new(settings: AppSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl Resource for AppSettingsResource {
    fn uri(&self) -> &str {
        APP_SETTINGS_URI
    }

    fn name(&self) -> &str {
        "config"
    }

    fn description(&self) -> &str {
        "Application settings"
    }

    fn mime_type(&self) -> &str {
        "application/json"
    }

    async fn read(&self) -> Result<String, ServerError> {
        self.settings
            .to_json()
            .map_err(|e| ServerError::Internal(format!("Failed to serialize settings: {}", e)))
    }
}
