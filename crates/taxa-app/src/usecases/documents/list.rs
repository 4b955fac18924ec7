use std::sync::Arc;

use taxa_core::documents::DocumentRecord;
use taxa_core::ports::{DocumentsApiPort, SessionStorePort};

use super::upload::DocumentsError;

/// Use case for the documents listing screen.
pub struct ListDocuments {
    documents_api: Arc<dyn DocumentsApiPort>,
    session_store: Arc<dyn SessionStorePort>,
}

impl ListDocuments {
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

    pub async fn execute(&self) -> Result<Vec<DocumentRecord>, DocumentsError> {
        let session = self
            .session_store
            .load()
            .await
            .map_err(DocumentsError::Store)?
            .ok_or(DocumentsError::NoSession)?;
        Ok(self.documents_api.list(&session.token).await?)
    }
}
