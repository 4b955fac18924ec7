//! The reqwest-backed backend client.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use taxa_core::config::AppConfig;
use taxa_core::documents::{DocumentRecord, StagedFile};
use taxa_core::ports::{AuthApiPort, ChatApiPort, DocumentsApiPort, GdprApiPort, RegistryApiPort};
use taxa_core::remote::{
    ApiError, AuthResponse, Credentials, DeletedData, IcoDetails, NewAccount, OnboardingUpdate,
};
use taxa_core::session::{AuthToken, UserRecord};

use crate::error::{decode_json, decode_unit, transport};

/// HTTP client for every backend surface.
///
/// One client instance is shared behind all the backend port traits. No
/// request timeout is configured: an in-flight request runs to completion
/// and failure is observed through the transport itself, which keeps the
/// single-attempt-per-click contract observable.
pub struct HttpBackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.backend.base_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AuthApiPort for HttpBackendClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        // OAuth2 password form: the email travels as `username`.
        let form = [
            ("username", credentials.email.as_str()),
            ("password", credentials.password.as_str()),
        ];
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .form(&form)
            .send()
            .await
            .map_err(transport)?;
        decode_json(response).await
    }

    async fn register(&self, account: &NewAccount) -> Result<AuthResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/api/auth/register"))
            .json(account)
            .send()
            .await
            .map_err(transport)?;
        decode_json(response).await
    }

    async fn update_onboarding(
        &self,
        token: &AuthToken,
        update: &OnboardingUpdate,
    ) -> Result<UserRecord, ApiError> {
        let response = self
            .http
            .patch(self.url("/api/auth/onboarding"))
            .bearer_auth(token.as_str())
            .json(update)
            .send()
            .await
            .map_err(transport)?;
        decode_json(response).await
    }
}

#[async_trait]
impl DocumentsApiPort for HttpBackendClient {
    async fn upload(&self, token: &AuthToken, files: &[StagedFile]) -> Result<(), ApiError> {
        let mut form = reqwest::multipart::Form::new();
        for file in files {
            let mut part = reqwest::multipart::Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone());
            if let Some(content_type) = &file.content_type {
                part = part
                    .mime_str(content_type)
                    .map_err(|err| ApiError::Transport(err.to_string()))?;
            }
            form = form.part("files", part);
        }

        let response = self
            .http
            .post(self.url("/api/documents/upload"))
            .bearer_auth(token.as_str())
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        decode_unit(response).await
    }

    async fn list(&self, token: &AuthToken) -> Result<Vec<DocumentRecord>, ApiError> {
        let response = self
            .http
            .get(self.url("/api/documents"))
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(transport)?;
        decode_json(response).await
    }
}

#[derive(Deserialize)]
struct ChatResponseBody {
    response: String,
}

#[async_trait]
impl ChatApiPort for HttpBackendClient {
    async fn send(&self, token: &AuthToken, message: &str) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.url("/api/chat"))
            .bearer_auth(token.as_str())
            .json(&serde_json::json!({ "message": message }))
            .send()
            .await
            .map_err(transport)?;
        let body: ChatResponseBody = decode_json(response).await?;
        Ok(body.response)
    }
}

#[derive(Deserialize)]
struct DeleteAccountBody {
    data_deleted: DeletedData,
}

#[async_trait]
impl GdprApiPort for HttpBackendClient {
    async fn export_data(&self, token: &AuthToken) -> Result<Value, ApiError> {
        let response = self
            .http
            .get(self.url("/api/gdpr/my-data"))
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(transport)?;
        decode_json(response).await
    }

    async fn delete_account(&self, token: &AuthToken) -> Result<DeletedData, ApiError> {
        let response = self
            .http
            .delete(self.url("/api/gdpr/delete-account"))
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(transport)?;
        let body: DeleteAccountBody = decode_json(response).await?;
        Ok(body.data_deleted)
    }

    async fn privacy_info(&self) -> Result<Value, ApiError> {
        let response = self
            .http
            .get(self.url("/api/gdpr/privacy-info"))
            .send()
            .await
            .map_err(transport)?;
        decode_json(response).await
    }
}

#[async_trait]
impl RegistryApiPort for HttpBackendClient {
    async fn ico_details(&self, ico: &str) -> Result<IcoDetails, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/api/ico/details/{ico}")))
            .send()
            .await
            .map_err(transport)?;
        decode_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn user_json(onboarding_completed: u8) -> serde_json::Value {
        serde_json::json!({
            "id": 1,
            "name": "Jana Nováková",
            "email": "jana@example.sk",
            "onboarding_completed": onboarding_completed,
            "created_at": "2026-01-15T10:00:00Z"
        })
    }

    #[tokio::test]
    async fn login_posts_the_oauth2_password_form() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/login")
            .match_header(
                "content-type",
                Matcher::Regex("application/x-www-form-urlencoded".into()),
            )
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("username".into(), "jana@example.sk".into()),
                Matcher::UrlEncoded("password".into(), "secret1".into()),
            ]))
            .with_status(200)
            .with_body(
                serde_json::json!({
                    "access_token": "token-1",
                    "token_type": "bearer",
                    "user": user_json(0)
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = HttpBackendClient::new(server.url());
        let response = client
            .login(&Credentials::new("jana@example.sk", "secret1"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.access_token.as_str(), "token-1");
        assert_eq!(response.user.onboarding_completed, 0);
    }

    #[tokio::test]
    async fn rejected_login_carries_the_server_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/auth/login")
            .with_status(401)
            .with_body(r#"{"detail": "Incorrect email or password"}"#)
            .create_async()
            .await;

        let client = HttpBackendClient::new(server.url());
        let err = client
            .login(&Credentials::new("jana@example.sk", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(err.server_message(), Some("Incorrect email or password"));
    }

    #[tokio::test]
    async fn register_surfaces_the_first_validation_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/auth/register")
            .with_status(422)
            .with_body(
                r#"{"detail": [{"msg": "Password must be at least 6 characters long", "loc": ["body", "password"]}]}"#,
            )
            .create_async()
            .await;

        let client = HttpBackendClient::new(server.url());
        let account = NewAccount {
            name: "Jana".into(),
            email: "jana@example.sk".into(),
            password: "abc".into(),
            ..NewAccount::default()
        };
        let err = client.register(&account).await.unwrap_err();

        assert_eq!(
            err.server_message(),
            Some("Password must be at least 6 characters long")
        );
    }

    #[tokio::test]
    async fn onboarding_patch_replays_the_bearer_token_and_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/auth/onboarding")
            .match_header("authorization", "Bearer token-1")
            .match_body(Matcher::Json(
                serde_json::json!({ "onboarding_completed": 2 }),
            ))
            .with_status(200)
            .with_body(user_json(2).to_string())
            .create_async()
            .await;

        let client = HttpBackendClient::new(server.url());
        let user = client
            .update_onboarding(&AuthToken::new("token-1"), &OnboardingUpdate::progress(2))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(user.onboarding_completed, 2);
    }

    #[tokio::test]
    async fn upload_sends_one_multipart_batch() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/documents/upload")
            .match_header("authorization", "Bearer token-1")
            .match_header(
                "content-type",
                Matcher::Regex("multipart/form-data".into()),
            )
            .with_status(200)
            .with_body(r#"{"uploaded": 2}"#)
            .create_async()
            .await;

        let files = vec![
            StagedFile {
                file_name: "invoice-01.pdf".into(),
                content_type: Some("application/pdf".into()),
                bytes: vec![1, 2, 3],
            },
            StagedFile {
                file_name: "receipt-02.pdf".into(),
                content_type: Some("application/pdf".into()),
                bytes: vec![4, 5, 6],
            },
        ];
        let client = HttpBackendClient::new(server.url());
        client
            .upload(&AuthToken::new("token-1"), &files)
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn chat_returns_the_reply_text() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/chat")
            .match_body(Matcher::Json(serde_json::json!({ "message": "Ahoj" })))
            .with_status(200)
            .with_body(r#"{"response": "Dobrý deň, ako môžem pomôcť?"}"#)
            .create_async()
            .await;

        let client = HttpBackendClient::new(server.url());
        let reply = client.send(&AuthToken::new("token-1"), "Ahoj").await.unwrap();
        assert_eq!(reply, "Dobrý deň, ako môžem pomôcť?");
    }

    #[tokio::test]
    async fn delete_account_unwraps_the_deletion_counts() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/api/gdpr/delete-account")
            .match_header("authorization", "Bearer token-1")
            .with_status(200)
            .with_body(r#"{"data_deleted": {"documents": 4, "chat_messages": 12}}"#)
            .create_async()
            .await;

        let client = HttpBackendClient::new(server.url());
        let deleted = client
            .delete_account(&AuthToken::new("token-1"))
            .await
            .unwrap();
        assert_eq!(deleted.documents, 4);
        assert_eq!(deleted.chat_messages, 12);
    }

    #[tokio::test]
    async fn ico_lookup_hits_the_details_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/ico/details/12345678")
            .with_status(200)
            .with_body(
                serde_json::json!({
                    "valid": true,
                    "ico": "12345678",
                    "business_name": "Jana Nováková - TAXA"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = HttpBackendClient::new(server.url());
        let details = client.ico_details("12345678").await.unwrap();

        mock.assert_async().await;
        assert!(details.valid);
        assert_eq!(details.business_name.as_deref(), Some("Jana Nováková - TAXA"));
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        // Nothing listens on this port.
        let client = HttpBackendClient::new("http://127.0.0.1:1");
        let err = client
            .login(&Credentials::new("jana@example.sk", "secret1"))
            .await
            .unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.server_message(), None);
    }
}
