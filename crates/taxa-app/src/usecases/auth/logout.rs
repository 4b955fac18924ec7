use std::sync::Arc;

use taxa_core::ports::SessionStorePort;
use taxa_core::session::Route;

/// Use case for signing out: clears the stored session and routes to the
/// landing page.
pub struct Logout {
    session_store: Arc<dyn SessionStorePort>,
}

impl Logout {
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self { session_store }
    }

    /// Create the use case from a cloned `Arc<dyn Port>` reference.
    pub fn from_ports(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self::new(session_store)
    }

    pub async fn execute(&self) -> anyhow::Result<Route> {
        self.session_store.clear().await?;
        Ok(Route::Landing)
    }
}
