//! # taxa-tauri
//!
//! Tauri integration layer for the TAXA client.
//!
//! ## Modules
//!
//! - **commands**: one module per screen (auth, onboarding, documents, chat,
//!   declaration, gdpr, language, registry)
//! - **bootstrap**: logging, dependency wiring, the `AppRuntime`, and the
//!   application entry point

pub mod bootstrap;
pub mod commands;

// Re-export commonly used types
pub use bootstrap::{run_app, AppRuntime};
