//! Logging configuration.
//!
//! Configures the Tauri logging plugin for both environments:
//!
//! - **Development**: debug level, output to the webview console and stdout
//! - **Production**: info level, output to the log directory and stdout
//!
//! Noise from Tauri internals and the HTTP stack is filtered down.

use log::LevelFilter;
use tauri_plugin_log::{Target, TargetKind, TimezoneStrategy};

/// Check if running in a development build.
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Create the logging builder.
///
/// Returns a builder that is passed to `.plugin()` in the Tauri builder.
pub fn get_builder() -> tauri_plugin_log::Builder {
    let is_dev = is_development();
    let default_log_level = if is_dev {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = tauri_plugin_log::Builder::new()
        .timezone_strategy(TimezoneStrategy::UseLocal)
        .level(default_log_level)
        // The HTTP stack is chatty at debug level.
        .level_for("reqwest", LevelFilter::Warn)
        .level_for("hyper", LevelFilter::Warn)
        .level_for("hyper_util", LevelFilter::Warn)
        .filter(|metadata| {
            // Skip tauri internal event logs and wry noise; the webview
            // target would otherwise feed its own log events back in.
            !(metadata.target().starts_with("tauri::")
                || metadata.target().starts_with("wry::")
                || metadata.target().contains("tauri-"))
        })
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        });

    if is_dev {
        // Development: browser DevTools console plus the terminal.
        builder = builder
            .target(Target::new(TargetKind::Webview))
            .target(Target::new(TargetKind::Stdout));
    } else {
        // Production: platform log directory plus the terminal.
        builder = builder
            .target(Target::new(TargetKind::LogDir {
                file_name: Some("taxa".to_string()),
            }))
            .target(Target::new(TargetKind::Stdout));
    }

    builder
}
