use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of onboarding steps the backend tracks.
pub const ONBOARDING_STEPS: u8 = 3;

/// Expense-accounting regime selectable during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    FlatRate,
    ActualExpenses,
}

impl BusinessType {
    /// The expense type is derived together with the business type from a
    /// single choice in the wizard; the two are never set independently.
    pub fn expense_type(self) -> ExpenseType {
        match self {
            BusinessType::FlatRate => ExpenseType::PausalneVydavky,
            BusinessType::ActualExpenses => ExpenseType::SkutocneVydavky,
        }
    }
}

/// Wire value of the expense regime. The Slovak terms are fixed by the
/// backend schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseType {
    PausalneVydavky,
    SkutocneVydavky,
}

/// Value-added-tax registration status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VatStatus {
    #[default]
    NonPayer,
    Payer,
}

/// User profile as returned by the backend.
///
/// `onboarding_completed` is the authoritative progress marker (0..=3). It is
/// mutated only by mirroring backend PATCH responses; the client never bumps
/// the counter on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub ico: Option<String>,
    #[serde(default)]
    pub dic: Option<String>,
    #[serde(default)]
    pub ic_dph: Option<String>,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub business_address: Option<String>,
    #[serde(default)]
    pub legal_form: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub business_type: Option<BusinessType>,
    #[serde(default)]
    pub expense_type: Option<ExpenseType>,
    #[serde(default)]
    pub vat_status: Option<VatStatus>,
    #[serde(default)]
    pub onboarding_completed: u8,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn is_onboarded(&self) -> bool {
        self.onboarding_completed >= ONBOARDING_STEPS
    }
}
