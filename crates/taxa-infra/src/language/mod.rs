//! Language preference persistence.

mod file_store;

pub use file_store::{FileLanguageStore, DEFAULT_LANGUAGE_FILE};
