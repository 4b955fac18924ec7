use std::sync::Arc;

use serde_json::Value;
use taxa_core::ports::{GdprApiPort, SessionStorePort};
use taxa_core::remote::ApiError;

/// Errors produced by the GDPR use cases.
#[derive(Debug, thiserror::Error)]
pub enum GdprError {
    #[error("not signed in")]
    NoSession,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("session store failed: {0}")]
    Store(#[source] anyhow::Error),
}

/// Export payload plus the suggested download filename.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DataExport {
    pub file_name: String,
    pub payload: Value,
}

/// Use case for the "export my data" action on the settings screen.
pub struct ExportMyData {
    gdpr_api: Arc<dyn GdprApiPort>,
    session_store: Arc<dyn SessionStorePort>,
}

impl ExportMyData {
    pub fn new(gdpr_api: Arc<dyn GdprApiPort>, session_store: Arc<dyn SessionStorePort>) -> Self {
        Self {
            gdpr_api,
            session_store,
        }
    }

    /// Create the use case from cloned `Arc<dyn Port>` references.
    pub fn from_ports(
        gdpr_api: Arc<dyn GdprApiPort>,
        session_store: Arc<dyn SessionStorePort>,
    ) -> Self {
        Self::new(gdpr_api, session_store)
    }

    pub async fn execute(&self) -> Result<DataExport, GdprError> {
        let session = self
            .session_store
            .load()
            .await
            .map_err(GdprError::Store)?
            .ok_or(GdprError::NoSession)?;

        let payload = self.gdpr_api.export_data(&session.token).await?;
        let file_name = format!(
            "taxa-data-export-{}.json",
            chrono::Utc::now().format("%Y-%m-%d")
        );
        Ok(DataExport { file_name, payload })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::testing::{sample_session, MockGdprApi, MockSessionStore};

    #[tokio::test]
    async fn export_names_the_download_by_date() {
        let uc = ExportMyData::from_ports(
            Arc::new(MockGdprApi::new()),
            Arc::new(MockSessionStore::with_session(sample_session(3))),
        );
        let export = uc.execute().await.unwrap();
        assert!(export.file_name.starts_with("taxa-data-export-"));
        assert!(export.file_name.ends_with(".json"));
        assert!(export.payload.get("profile").is_some());
    }

    #[tokio::test]
    async fn export_requires_a_session() {
        let uc = ExportMyData::from_ports(
            Arc::new(MockGdprApi::new()),
            Arc::new(MockSessionStore::empty()),
        );
        assert!(matches!(
            uc.execute().await.unwrap_err(),
            GdprError::NoSession
        ));
    }
}
