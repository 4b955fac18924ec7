//! GDPR use cases: data export, account deletion, privacy disclosure.

pub mod delete;
pub mod export;
pub mod privacy;

pub use delete::{AccountDeletion, DeleteAccount};
pub use export::{DataExport, ExportMyData, GdprError};
pub use privacy::FetchPrivacyInfo;
