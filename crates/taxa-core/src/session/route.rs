use serde::{Deserialize, Serialize};

/// Page routes of the client.
///
/// Each route is a GET-navigable screen; commands return one of these when
/// the webview should navigate instead of rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Landing,
    Login,
    Register,
    Onboarding,
    Dashboard,
    Documents,
    Upload,
    Chat,
    Declaration,
    Settings,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Onboarding => "/onboarding",
            Route::Dashboard => "/dashboard",
            Route::Documents => "/dashboard/documents",
            Route::Upload => "/dashboard/upload",
            Route::Chat => "/dashboard/chat",
            Route::Declaration => "/dashboard/declaration",
            Route::Settings => "/dashboard/settings",
        }
    }
}

/// Protected screens and their gate requirements.
///
/// Every protected screen requires a session. The dashboard family
/// additionally requires completed onboarding; settings and the declaration
/// estimate are reachable as soon as the user is signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Dashboard,
    Documents,
    Upload,
    Chat,
    Declaration,
    Settings,
    Onboarding,
}

impl Screen {
    /// Whether the screen also requires `onboarding_completed >= 3`.
    pub fn requires_onboarded(self) -> bool {
        matches!(
            self,
            Screen::Dashboard | Screen::Documents | Screen::Upload | Screen::Chat
        )
    }
}
