//! Shared mock ports for use-case tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::Value;
use taxa_core::documents::{DocumentRecord, StagedFile};
use taxa_core::i18n::Language;
use taxa_core::ports::{
    AuthApiPort, ChatApiPort, DocumentsApiPort, GdprApiPort, LanguageStorePort, SessionStorePort,
};
use taxa_core::remote::{
    ApiError, AuthResponse, Credentials, DeletedData, IcoDetails, NewAccount, OnboardingUpdate,
};
use taxa_core::session::{AuthToken, Session, UserRecord};

pub fn sample_user(onboarding_completed: u8) -> UserRecord {
    UserRecord {
        id: 1,
        name: "Jana Nováková".into(),
        email: "jana@example.sk".into(),
        ico: None,
        dic: None,
        ic_dph: None,
        business_name: None,
        business_address: None,
        legal_form: None,
        phone: None,
        business_type: None,
        expense_type: None,
        vat_status: None,
        onboarding_completed,
        created_at: Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
    }
}

pub fn sample_session(onboarding_completed: u8) -> Session {
    Session::new(AuthToken::new("token-1"), sample_user(onboarding_completed))
}

pub fn sample_auth_response(onboarding_completed: u8) -> AuthResponse {
    AuthResponse {
        access_token: AuthToken::new("token-1"),
        token_type: "bearer".into(),
        user: sample_user(onboarding_completed),
    }
}

/// In-memory session store.
pub struct MockSessionStore {
    inner: Mutex<Option<Session>>,
}

impl MockSessionStore {
    pub fn empty() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Mutex::new(Some(session)),
        }
    }
}

#[async_trait]
impl SessionStorePort for MockSessionStore {
    async fn save(&self, session: &Session) -> anyhow::Result<()> {
        *self.inner.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn load(&self) -> anyhow::Result<Option<Session>> {
        Ok(self.inner.lock().unwrap().clone())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        *self.inner.lock().unwrap() = None;
        Ok(())
    }
}

/// Auth API fake: returns a canned response or a canned rejection, and
/// applies onboarding updates onto the stored user like the backend does.
pub struct MockAuthApi {
    response: Mutex<Result<AuthResponse, ApiError>>,
    pub patches: Mutex<Vec<OnboardingUpdate>>,
}

impl MockAuthApi {
    pub fn new(response: AuthResponse) -> Self {
        Self {
            response: Mutex::new(Ok(response)),
            patches: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(status: u16, message: &str) -> Self {
        Self {
            response: Mutex::new(Err(ApiError::Rejected {
                status,
                message: Some(message.into()),
            })),
            patches: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AuthApiPort for MockAuthApi {
    async fn login(&self, _credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.response.lock().unwrap().clone()
    }

    async fn register(&self, account: &NewAccount) -> Result<AuthResponse, ApiError> {
        let mut response = self.response.lock().unwrap().clone()?;
        response.user.email = account.email.clone();
        response.user.name = account.name.clone();
        Ok(response)
    }

    async fn update_onboarding(
        &self,
        _token: &AuthToken,
        update: &OnboardingUpdate,
    ) -> Result<UserRecord, ApiError> {
        self.patches.lock().unwrap().push(update.clone());
        let mut user = self.response.lock().unwrap().clone()?.user;
        if let Some(step) = update.onboarding_completed {
            user.onboarding_completed = step;
        }
        Ok(user)
    }
}

/// Documents API fake with an upload call log.
pub struct MockDocumentsApi {
    pub uploads: Mutex<Vec<usize>>,
    pub fail_uploads: bool,
}

impl MockDocumentsApi {
    pub fn new() -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
            fail_uploads: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
            fail_uploads: true,
        }
    }
}

#[async_trait]
impl DocumentsApiPort for MockDocumentsApi {
    async fn upload(&self, _token: &AuthToken, files: &[StagedFile]) -> Result<(), ApiError> {
        if self.fail_uploads {
            return Err(ApiError::Transport("connection refused".into()));
        }
        self.uploads.lock().unwrap().push(files.len());
        Ok(())
    }

    async fn list(&self, _token: &AuthToken) -> Result<Vec<DocumentRecord>, ApiError> {
        Ok(Vec::new())
    }
}

/// Chat API fake.
pub struct MockChatApi {
    pub reply: Mutex<Result<String, ApiError>>,
}

impl MockChatApi {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Mutex::new(Ok(text.into())),
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            reply: Mutex::new(Err(error)),
        }
    }
}

#[async_trait]
impl ChatApiPort for MockChatApi {
    async fn send(&self, _token: &AuthToken, _message: &str) -> Result<String, ApiError> {
        self.reply.lock().unwrap().clone()
    }
}

/// GDPR API fake.
pub struct MockGdprApi {
    pub deleted: DeletedData,
    pub fail: bool,
}

impl MockGdprApi {
    pub fn new() -> Self {
        Self {
            deleted: DeletedData {
                documents: 4,
                chat_messages: 12,
            },
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            deleted: DeletedData::default(),
            fail: true,
        }
    }
}

#[async_trait]
impl GdprApiPort for MockGdprApi {
    async fn export_data(&self, _token: &AuthToken) -> Result<Value, ApiError> {
        if self.fail {
            return Err(ApiError::Transport("connection refused".into()));
        }
        Ok(serde_json::json!({ "profile": { "email": "jana@example.sk" } }))
    }

    async fn delete_account(&self, _token: &AuthToken) -> Result<DeletedData, ApiError> {
        if self.fail {
            return Err(ApiError::Transport("connection refused".into()));
        }
        Ok(self.deleted.clone())
    }

    async fn privacy_info(&self) -> Result<Value, ApiError> {
        Ok(serde_json::json!({ "controller": "TAXA" }))
    }
}

/// In-memory language store.
pub struct MockLanguageStore {
    inner: Mutex<Option<Language>>,
}

impl MockLanguageStore {
    pub fn empty() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    pub fn with_language(language: Language) -> Self {
        Self {
            inner: Mutex::new(Some(language)),
        }
    }
}

#[async_trait]
impl LanguageStorePort for MockLanguageStore {
    async fn load(&self) -> anyhow::Result<Option<Language>> {
        Ok(*self.inner.lock().unwrap())
    }

    async fn save(&self, language: Language) -> anyhow::Result<()> {
        *self.inner.lock().unwrap() = Some(language);
        Ok(())
    }
}

/// Registry API fake.
pub struct MockRegistryApi;

#[async_trait]
impl taxa_core::ports::RegistryApiPort for MockRegistryApi {
    async fn ico_details(&self, ico: &str) -> Result<IcoDetails, ApiError> {
        Ok(IcoDetails {
            valid: ico.len() == 8,
            ico: ico.to_string(),
            business_name: Some("Jana Nováková - TAXA".into()),
            business_address: Some("Hlavná 1, Bratislava".into()),
            legal_form: Some("Podnikateľ-fyzická osoba".into()),
            dic: None,
            ic_dph: None,
        })
    }
}
