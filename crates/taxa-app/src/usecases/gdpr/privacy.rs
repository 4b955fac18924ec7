use std::sync::Arc;

use serde_json::Value;
use taxa_core::ports::GdprApiPort;
use taxa_core::remote::ApiError;

/// Use case for the static privacy disclosure shown on the settings screen.
/// Needs no session.
pub struct FetchPrivacyInfo {
    gdpr_api: Arc<dyn GdprApiPort>,
}

impl FetchPrivacyInfo {
    pub fn new(gdpr_api: Arc<dyn GdprApiPort>) -> Self {
        Self { gdpr_api }
    }

    /// Create the use case from a cloned `Arc<dyn Port>` reference.
    pub fn from_ports(gdpr_api: Arc<dyn GdprApiPort>) -> Self {
        Self::new(gdpr_api)
    }

    pub async fn execute(&self) -> Result<Value, ApiError> {
        self.gdpr_api.privacy_info().await
    }
}
