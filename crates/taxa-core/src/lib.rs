//! # taxa-core
//!
//! Core domain models and business logic for the TAXA client.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies: the session model, the onboarding wizard state machine,
//! the translation resolver, the declaration estimate, the chat log, and
//! the ports implemented by the infrastructure and API layers.

// Public module exports
pub mod chat;
pub mod config;
pub mod declaration;
pub mod documents;
pub mod i18n;
pub mod onboarding;
pub mod ports;
pub mod remote;
pub mod session;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use i18n::{Language, Translator};
pub use session::{AuthToken, Route, Screen, Session, UserRecord};
