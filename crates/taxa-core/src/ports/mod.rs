//! Port interfaces for the application layer.
//!
//! Ports define the contract between the use cases and the infrastructure
//! implementations (file stores, the HTTP backend client). The core stays
//! independent of how any of them is actually backed.

pub mod backend;
pub mod language_store;
pub mod session_store;

pub use backend::{AuthApiPort, ChatApiPort, DocumentsApiPort, GdprApiPort, RegistryApiPort};
pub use language_store::LanguageStorePort;
pub use session_store::SessionStorePort;
