//! Session domain model.
//!
//! The session is the client-held proof of authentication: the bearer token
//! plus the cached user profile. It is owned by the client process and lives
//! until logout, account deletion, or absence at load. Absence is a normal
//! branch everywhere, never an error.

mod route;
mod token;
mod user;

pub use route::{Route, Screen};
pub use token::AuthToken;
pub use user::{BusinessType, ExpenseType, UserRecord, VatStatus, ONBOARDING_STEPS};

use serde::{Deserialize, Serialize};

/// Authenticated session: token and user record travel together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: AuthToken,
    pub user: UserRecord,
}

impl Session {
    pub fn new(token: AuthToken, user: UserRecord) -> Self {
        Self { token, user }
    }
}
