pub mod logging;
pub mod run;
pub mod runtime;
pub mod wiring;

pub use run::run_app;
pub use runtime::{AppRuntime, UseCases};
pub use wiring::{build_deps, WiringError};
