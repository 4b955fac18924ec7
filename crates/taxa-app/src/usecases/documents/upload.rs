use std::sync::Arc;

use taxa_core::documents::StagedFile;
use taxa_core::ports::{DocumentsApiPort, SessionStorePort};
use taxa_core::remote::ApiError;
use taxa_core::session::Route;

/// Errors produced by the document use cases.
#[derive(Debug, thiserror::Error)]
pub enum DocumentsError {
    /// Submit clicked with nothing staged; no request is made.
    #[error("no files staged")]
    NothingStaged,
    #[error("not signed in")]
    NoSession,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("session store failed: {0}")]
    Store(#[source] anyhow::Error),
}

/// Use case for the standalone upload screen.
///
/// The whole batch goes out as one multipart request; from the screen's
/// perspective it is all-or-nothing, with no per-file error attribution.
/// Success navigates to the dashboard.
pub struct UploadDocuments {
    documents_api: Arc<dyn DocumentsApiPort>,
    session_store: Arc<dyn SessionStorePort>,
}

impl UploadDocuments {
    pub fn new(
        documents_api: Arc<dyn DocumentsApiPort>,
        session_store: Arc<dyn SessionStorePort>,
    ) -> Self {
        Self {
            documents_api,
            session_store,
        }
    }

    /// Create the use case from cloned `Arc<dyn Port>` references.
    pub fn from_ports(
        documents_api: Arc<dyn DocumentsApiPort>,
        session_store: Arc<dyn SessionStorePort>,
    ) -> Self {
        Self::new(documents_api, session_store)
    }

    pub async fn execute(&self, files: &[StagedFile]) -> Result<Route, DocumentsError> {
        if files.is_empty() {
            return Err(DocumentsError::NothingStaged);
        }
        let session = self
            .session_store
            .load()
            .await
            .map_err(DocumentsError::Store)?
            .ok_or(DocumentsError::NoSession)?;

        self.documents_api.upload(&session.token, files).await?;
        log::info!("uploaded a batch of {} document(s)", files.len());
        Ok(Route::Dashboard)
    }
}
