//! Session persistence.

mod file_store;

pub use file_store::{FileSessionStore, DEFAULT_SESSION_FILE};
