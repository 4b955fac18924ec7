//! TAXA application orchestration layer.
//!
//! Use cases coordinating the domain with the session store, the language
//! preference, and the backend API, all through the ports defined in
//! `taxa-core`.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
