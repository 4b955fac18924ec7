//! Session store port.
//!
//! The persisted token/user pair lives behind this contract; no screen or
//! use case touches the underlying storage directly. Implementations are
//! provided by the infrastructure layer (file-based in production, in-memory
//! in tests).

use async_trait::async_trait;

use crate::session::Session;

#[async_trait]
pub trait SessionStorePort: Send + Sync {
    /// Persist token and user record together.
    async fn save(&self, session: &Session) -> anyhow::Result<()>;

    /// Read the stored session.
    ///
    /// Absence (nothing stored, or a stored document that cannot be read
    /// back) is `Ok(None)`: "not logged in" is a normal branch, not an
    /// error.
    async fn load(&self) -> anyhow::Result<Option<Session>>;

    /// Remove the stored session.
    async fn clear(&self) -> anyhow::Result<()>;
}
