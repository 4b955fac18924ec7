//! Document upload and listing use cases.

pub mod list;
pub mod upload;

pub use list::ListDocuments;
pub use upload::{DocumentsError, UploadDocuments};
