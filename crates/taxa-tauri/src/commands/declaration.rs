//! Declaration estimate commands.
//!
//! Everything here is local: the estimate is recomputed from the raw form
//! and nothing is submitted anywhere.

use chrono::Datelike;

use taxa_core::declaration::{DeclarationForm, DeclarationSummary};

/// Empty form defaulting to the previous calendar year.
#[tauri::command]
pub fn declaration_defaults() -> DeclarationForm {
    DeclarationForm::for_year(chrono::Local::now().year() - 1)
}

/// Recompute the summary from the raw inputs; non-numeric amounts count as
/// zero and the estimate is clamped at zero.
#[tauri::command]
pub fn declaration_summary(form: DeclarationForm) -> DeclarationSummary {
    form.summary()
}
