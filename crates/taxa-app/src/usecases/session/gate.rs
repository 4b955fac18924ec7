use std::sync::Arc;

use taxa_core::ports::SessionStorePort;
use taxa_core::session::{Route, Screen, Session};

/// Gate decision for a protected screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    /// Render the screen with this session.
    Proceed(Session),
    /// Render nothing; navigate here instead.
    Redirect(Route),
}

/// Use case every protected screen runs at mount.
///
/// A missing session always redirects to the login page before any protected
/// content renders. The dashboard family additionally bounces unfinished
/// accounts to the wizard, and the wizard itself bounces finished accounts
/// forward to the dashboard.
pub struct SessionGate {
    session_store: Arc<dyn SessionStorePort>,
}

impl SessionGate {
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self { session_store }
    }

    /// Create the use case from a cloned `Arc<dyn Port>` reference.
    pub fn from_ports(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self::new(session_store)
    }

    pub async fn execute(&self, screen: Screen) -> anyhow::Result<Gate> {
        let Some(session) = self.session_store.load().await? else {
            return Ok(Gate::Redirect(Route::Login));
        };

        if screen == Screen::Onboarding && session.user.is_onboarded() {
            return Ok(Gate::Redirect(Route::Dashboard));
        }
        if screen.requires_onboarded() && !session.user.is_onboarded() {
            return Ok(Gate::Redirect(Route::Onboarding));
        }
        Ok(Gate::Proceed(session))
    }
}
