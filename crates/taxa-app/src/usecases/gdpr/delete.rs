use std::sync::Arc;

use taxa_core::ports::{GdprApiPort, SessionStorePort};
use taxa_core::remote::DeletedData;
use taxa_core::session::Route;

use super::export::GdprError;

/// Deletion receipt plus where to navigate afterwards.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AccountDeletion {
    pub deleted: DeletedData,
    pub destination: Route,
}

/// Use case for permanent account deletion.
///
/// On success the local session is cleared and the client navigates to the
/// landing page. On failure the session is left untouched so the user stays
/// signed in.
pub struct DeleteAccount {
    gdpr_api: Arc<dyn GdprApiPort>,
    session_store: Arc<dyn SessionStorePort>,
}

impl DeleteAccount {
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

    pub async fn execute(&self) -> Result<AccountDeletion, GdprError> {
        let session = self
            .session_store
            .load()
            .await
            .map_err(GdprError::Store)?
            .ok_or(GdprError::NoSession)?;

        let deleted = self.gdpr_api.delete_account(&session.token).await?;
        self.session_store
            .clear()
            .await
            .map_err(GdprError::Store)?;

        log::info!(
            "account deleted ({} documents, {} chat messages)",
            deleted.documents,
            deleted.chat_messages
        );
        Ok(AccountDeletion {
            deleted,
            destination: Route::Landing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::testing::{sample_session, MockGdprApi, MockSessionStore};

    #[tokio::test]
    async fn deletion_clears_the_session_and_reports_counts() {
        let store = Arc::new(MockSessionStore::with_session(sample_session(3)));
        let uc = DeleteAccount::from_ports(Arc::new(MockGdprApi::new()), store.clone());

        let outcome = uc.execute().await.unwrap();

        assert_eq!(outcome.destination, Route::Landing);
        assert_eq!(outcome.deleted.documents, 4);
        assert_eq!(outcome.deleted.chat_messages, 12);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn failed_deletion_keeps_the_session() {
        let store = Arc::new(MockSessionStore::with_session(sample_session(3)));
        let uc = DeleteAccount::from_ports(Arc::new(MockGdprApi::failing()), store.clone());

        uc.execute().await.unwrap_err();

        assert!(store.load().await.unwrap().is_some());
    }
}
