//! # taxa-api
//!
//! HTTP adapter for the TAXA backend API: a reqwest client implementing the
//! backend ports defined in `taxa-core`.

pub mod client;
pub mod error;

pub use client::HttpBackendClient;
