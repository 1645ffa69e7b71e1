//! Client-side page behaviours for the STDS token portal
//!
//! This crate compiles to WASM and is loaded by the portal templates. It
//! wires a handful of independent behaviours onto the page once the markup
//! is ready:
//!
//! - splash screen redirect to `/` after 2.9 s
//! - token inputs masked to at most six digits
//! - phone inputs masked to digits, spaces, `+` and `-`
//! - a ripple overlay on every `.btn` click
//! - alerts fading out after 4 s and removed after 4.5 s
//! - click-to-copy on the token display
//!
//! ## Module Structure
//! - `config`: delays, selectors and labels, with JSON overrides
//! - `sanitize`, `ripple`, `dispatch`: pure logic, testable without a browser
//! - `dom`: thin web-sys layer (queries, styles, listeners, timers)
//! - `behaviors`: one module per behaviour plus the click dispatcher
//! - `error`, `logging`: error types and console output

#![forbid(unsafe_code)]

pub mod behaviors;
pub mod config;
pub mod dispatch;
pub mod dom;
pub mod error;
pub mod logging;
pub mod ripple;
pub mod sanitize;

use std::rc::Rc;

use web_sys::{Document, Window};

pub use behaviors::InstallReport;
pub use config::BehaviorConfig;
pub use error::{BehaviorError, Result};

/// Attribute on `<html>` marking a document whose behaviours are wired
pub const INSTALLED_ATTR: &str = "data-stds-behaviors";

/// Install the page behaviours on the current document.
///
/// Returns `Ok(None)` when they were already installed on this page.
///
/// # Errors
///
/// Returns an error outside a browser, or if the configuration is invalid.
pub fn run() -> Result<Option<InstallReport>> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let config = load_config(&document);
    run_with(&window, &document, config)
}

/// Install the page behaviours with an explicit configuration.
///
/// Returns `Ok(None)` when they were already installed on this document.
///
/// # Errors
///
/// Returns `BehaviorError::InvalidConfig` for unusable configuration, or a
/// DOM error if the document cannot be marked as installed.
pub fn run_with(
    window: &Window,
    document: &Document,
    config: BehaviorConfig,
) -> Result<Option<InstallReport>> {
    config.validate()?;

    let root = document
        .document_element()
        .ok_or(BehaviorError::DocumentUnavailable)?;
    if root.has_attribute(INSTALLED_ATTR) {
        return Ok(None);
    }
    root.set_attribute(INSTALLED_ATTR, "installed")
        .map_err(|e| BehaviorError::dom(&e))?;

    let config = Rc::new(config);
    Ok(Some(behaviors::install_all(window, document, &config)))
}

/// Read the page's JSON override block, falling back to defaults.
///
/// A malformed block is logged and ignored.
#[must_use]
pub fn load_config(document: &Document) -> BehaviorConfig {
    let Some(json) = document
        .get_element_by_id(config::CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return BehaviorConfig::default();
    };

    BehaviorConfig::from_json(&json).unwrap_or_else(|e| {
        logging::warn("config", &e);
        BehaviorConfig::default()
    })
}
