//! Resource system
//!
//! Resources are URI-addressed, read-only documents a client can list and
//! read.

mod app_settings;
mod registry;

pub use app_settings::{APP_SETTINGS_URI, AppSettingsResource};
pub use registry::ResourceRegistry;

use async_trait::async_trait;

use crate::protocol::ServerError;

/// A readable document exposed to the client
#[async_trait]
pub trait Resource: Send + Sync {
    /// Unique address, e.g. `config://app/settings`
    fn uri(&self) -> &str;

    /// Short name shown in listings
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    fn mime_type(&self) -> &str {
        "text/plain"
    }

    /// Produce the current text of the resource
    async fn read(&self) -> Result<String, ServerError>;
}
