//! Console logging for the page behaviours
//!
//! Thin wrappers over the leptos logging macros so every message carries the
//! same prefix. In the browser these go to the console; in native test builds
//! they go to stdout/stderr.

use leptos::logging;

use crate::config::BehaviorConfig;
use crate::error::BehaviorError;

const PREFIX: &str = "[stds]";

/// Log only when `debug` is enabled in the configuration
pub fn debug(config: &BehaviorConfig, message: &str) {
    if config.debug {
        logging::log!("{PREFIX} {message}");
    }
}

/// Always logged: a behaviour could not be installed or a DOM call failed
pub fn warn(context: &str, error: &BehaviorError) {
    logging::warn!("{}", format_warning(context, error));
}

/// Text of a [`warn`] line
#[must_use]
pub fn format_warning(context: &str, error: &BehaviorError) -> String {
    format!("{PREFIX} {context}: {error}")
}
