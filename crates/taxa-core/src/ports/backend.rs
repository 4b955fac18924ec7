//! Backend API ports.
//!
//! One trait per backend surface, all implemented by the HTTP client in the
//! API layer. Errors are the typed [`ApiError`] taxonomy rather than
//! `anyhow` because the distinction between validation, rejection and
//! transport failure is part of the user-visible contract.

use async_trait::async_trait;
use serde_json::Value;

use crate::documents::{DocumentRecord, StagedFile};
use crate::remote::{
    ApiError, AuthResponse, Credentials, DeletedData, IcoDetails, NewAccount, OnboardingUpdate,
};
use crate::session::{AuthToken, UserRecord};

/// Authentication and profile endpoints.
#[async_trait]
pub trait AuthApiPort: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError>;

    async fn register(&self, account: &NewAccount) -> Result<AuthResponse, ApiError>;

    /// Partial user update; the backend returns the full updated record.
    async fn update_onboarding(
        &self,
        token: &AuthToken,
        update: &OnboardingUpdate,
    ) -> Result<UserRecord, ApiError>;
}

/// Document endpoints.
#[async_trait]
pub trait DocumentsApiPort: Send + Sync {
    /// Upload the staged files as one multipart batch.
    async fn upload(&self, token: &AuthToken, files: &[StagedFile]) -> Result<(), ApiError>;

    async fn list(&self, token: &AuthToken) -> Result<Vec<DocumentRecord>, ApiError>;
}

/// Chat inference endpoint.
#[async_trait]
pub trait ChatApiPort: Send + Sync {
    /// Send one user message; returns the assistant's reply text.
    async fn send(&self, token: &AuthToken, message: &str) -> Result<String, ApiError>;
}

/// GDPR endpoints.
#[async_trait]
pub trait GdprApiPort: Send + Sync {
    async fn export_data(&self, token: &AuthToken) -> Result<Value, ApiError>;

    async fn delete_account(&self, token: &AuthToken) -> Result<DeletedData, ApiError>;

    /// Static disclosure payload; needs no auth.
    async fn privacy_info(&self) -> Result<Value, ApiError>;
}

/// Business-registry lookup endpoint.
#[async_trait]
pub trait RegistryApiPort: Send + Sync {
    async fn ico_details(&self, ico: &str) -> Result<IcoDetails, ApiError>;
}
