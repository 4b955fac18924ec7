use std::sync::Arc;

use taxa_core::ports::{AuthApiPort, SessionStorePort};
use taxa_core::remote::{ApiError, Credentials};
use taxa_core::session::{Route, Session, UserRecord};

/// Errors produced by the login flow.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("session store failed: {0}")]
    Store(#[source] anyhow::Error),
}

/// Where a successful sign-in lands, and the user it signed in.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub user: UserRecord,
    pub destination: Route,
}

/// Use case for signing in.
///
/// On success the session is saved and the destination is decided by the
/// server-recorded onboarding progress: unfinished accounts land on the
/// wizard, everyone else on the dashboard.
pub struct Login {
    auth_api: Arc<dyn AuthApiPort>,
    session_store: Arc<dyn SessionStorePort>,
}

impl Login {
    pub fn new(auth_api: Arc<dyn AuthApiPort>, session_store: Arc<dyn SessionStorePort>) -> Self {
        Self {
            auth_api,
            session_store,
        }
    }

    /// Create the use case from cloned `Arc<dyn Port>` references.
    pub fn from_ports(
        auth_api: Arc<dyn AuthApiPort>,
        session_store: Arc<dyn SessionStorePort>,
    ) -> Self {
        Self::new(auth_api, session_store)
    }

    pub async fn execute(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let credentials = Credentials::new(email, password);
        let response = self.auth_api.login(&credentials).await?;

        let destination = if response.user.is_onboarded() {
            Route::Dashboard
        } else {
            Route::Onboarding
        };
        let user = response.user.clone();

        self.session_store
            .save(&Session::new(response.access_token, response.user))
            .await
            .map_err(AuthError::Store)?;

        log::info!("user {} signed in", user.id);
        Ok(LoginOutcome { user, destination })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::testing::{sample_auth_response, MockAuthApi, MockSessionStore};

    #[tokio::test]
    async fn successful_login_saves_the_session() {
        let auth = Arc::new(MockAuthApi::new(sample_auth_response(0)));
        let store = Arc::new(MockSessionStore::empty());
        let uc = Login::from_ports(auth, store.clone());

        let outcome = uc.execute("jana@example.sk", "secret").await.unwrap();

        assert_eq!(outcome.destination, Route::Onboarding);
        let saved = store.load().await.unwrap().unwrap();
        assert_eq!(saved.user.email, "jana@example.sk");
    }

    #[tokio::test]
    async fn onboarded_user_is_sent_to_the_dashboard() {
        let auth = Arc::new(MockAuthApi::new(sample_auth_response(3)));
        let store = Arc::new(MockSessionStore::empty());
        let uc = Login::from_ports(auth, store);

        let outcome = uc.execute("jana@example.sk", "secret").await.unwrap();

        assert_eq!(outcome.destination, Route::Dashboard);
    }

    #[tokio::test]
    async fn rejected_login_leaves_no_session_behind() {
        let auth = Arc::new(MockAuthApi::rejecting(401, "Incorrect email or password"));
        let store = Arc::new(MockSessionStore::empty());
        let uc = Login::from_ports(auth, store.clone());

        let err = uc.execute("jana@example.sk", "wrong").await.unwrap_err();

        match err {
            AuthError::Api(api) => {
                assert_eq!(api.server_message(), Some("Incorrect email or password"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(store.load().await.unwrap().is_none());
    }
}
