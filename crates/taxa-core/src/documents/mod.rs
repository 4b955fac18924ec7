//! Document staging and records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One file staged for upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedFile {
    pub file_name: String,
    #[serde(default)]
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Ordered client-local batch of staged files.
///
/// Files accumulate from the picker or drag-and-drop, can be removed one at
/// a time before submission, and the whole batch is cleared after a
/// successful upload. Upload failures leave the batch untouched for retry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StagedBatch {
    files: Vec<StagedFile>,
}

impl StagedBatch {
    pub fn stage(&mut self, file: StagedFile) {
        self.files.push(file);
    }

    pub fn remove(&mut self, index: usize) -> Option<StagedFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Document record as returned by the backend listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: i64,
    pub filename: String,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub extracted_data: Option<serde_json::Value>,
    #[serde(default)]
    pub confidence: Option<i32>,
    pub uploaded_at: DateTime<Utc>,
}
