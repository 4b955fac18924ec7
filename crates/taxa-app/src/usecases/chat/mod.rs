//! Chat panel use case.

pub mod panel;

pub use panel::ChatPanel;
