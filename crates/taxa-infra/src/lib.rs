//! Infrastructure adapters for the TAXA client.
//!
//! File-backed implementations of the persistence ports plus configuration
//! loading. Everything here is plumbing; decisions live in `taxa-app`.

pub mod config;
pub mod fs;
pub mod language;
pub mod session;

// `self::` disambiguates the module from the `config` crate.
pub use self::config::load_config;
pub use fs::app_data_dir;
pub use language::FileLanguageStore;
pub use session::FileSessionStore;
