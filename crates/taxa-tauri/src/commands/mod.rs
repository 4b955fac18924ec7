//! Tauri commands, one module per screen.

pub mod auth;
pub mod chat;
pub mod declaration;
pub mod documents;
pub mod dto;
pub mod error;
pub mod gdpr;
pub mod language;
pub mod onboarding;
pub mod registry;
pub mod session;

pub use error::map_err;
