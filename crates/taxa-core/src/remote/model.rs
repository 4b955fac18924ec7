use serde::{Deserialize, Serialize};

use crate::session::{AuthToken, BusinessType, ExpenseType, UserRecord, VatStatus};

/// Login credentials. The backend expects an OAuth2 password form where the
/// email travels in the `username` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Registration payload. The business fields are optional pre-fill from the
/// registry lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ico: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ic_dph: Option<String>,
}

/// Successful login/registration response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub access_token: AuthToken,
    pub token_type: String,
    pub user: UserRecord,
}

/// Partial user update for `PATCH /api/auth/onboarding`.
///
/// Absent fields are omitted from the payload; the backend only touches the
/// fields that are present and returns the full updated record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<BusinessType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_type: Option<ExpenseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_status: Option<VatStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding_completed: Option<u8>,
}

impl OnboardingUpdate {
    /// Bare progress update, as sent by steps 2 and 3.
    pub fn progress(step: u8) -> Self {
        Self {
            onboarding_completed: Some(step),
            ..Self::default()
        }
    }
}

/// Counts returned by the account-deletion endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletedData {
    #[serde(default)]
    pub documents: u64,
    #[serde(default)]
    pub chat_messages: u64,
}

/// Business-registry lookup result.
///
/// An unknown or malformed IČO is reported through `valid`, not as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcoDetails {
    pub valid: bool,
    pub ico: String,
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
