use std::sync::Arc;

use taxa_core::ports::{AuthApiPort, SessionStorePort};
use taxa_core::remote::{ApiError, NewAccount};
use taxa_core::session::{Route, Session};

use super::login::LoginOutcome;

/// Errors produced by the registration flow.
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    /// Caught client-side, before any network call.
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("session store failed: {0}")]
    Store(#[source] anyhow::Error),
}

/// Registration form as collected by the screen. The business fields are
/// optional pre-fill from the registry lookup.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub ico: Option<String>,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub business_address: Option<String>,
    #[serde(default)]
    pub legal_form: Option<String>,
    #[serde(default)]
    pub dic: Option<String>,
    #[serde(default)]
    pub ic_dph: Option<String>,
}

/// Use case for creating an account.
///
/// The password-confirmation check happens here and never reaches the wire.
/// A fresh account starts with `onboarding_completed = 0`, so the outcome
/// routes to the wizard.
pub struct Register {
    auth_api: Arc<dyn AuthApiPort>,
    session_store: Arc<dyn SessionStorePort>,
}

impl Register {
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

    pub async fn execute(&self, form: RegisterForm) -> Result<LoginOutcome, RegisterError> {
        if form.password != form.confirm_password {
            return Err(RegisterError::PasswordMismatch);
        }

        let account = NewAccount {
            name: form.name,
            email: form.email,
            password: form.password,
            ico: form.ico,
            business_name: form.business_name,
            business_address: form.business_address,
            legal_form: form.legal_form,
            dic: form.dic,
            ic_dph: form.ic_dph,
        };
        let response = self.auth_api.register(&account).await?;

        let destination = if response.user.is_onboarded() {
            Route::Dashboard
        } else {
            Route::Onboarding
        };
        let user = response.user.clone();

        self.session_store
            .save(&Session::new(response.access_token, response.user))
            .await
            .map_err(RegisterError::Store)?;

        log::info!("registered user {}", user.id);
        Ok(LoginOutcome { user, destination })
    }
}
