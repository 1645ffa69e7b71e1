//! Splash screen redirect
//!
//! When the splash container is on the page, navigate to the redirect path
//! once the splash delay elapses. One-shot, no cancellation.

use web_sys::{Document, Window};

use crate::config::BehaviorConfig;
use crate::dom;
use crate::error::BehaviorError;
use crate::logging;

/// Schedule the redirect through `window.location`.
///
/// Returns `true` if a splash element was found and the redirect scheduled.
pub fn install(window: &Window, document: &Document, config: &BehaviorConfig) -> bool {
    let location = window.location();
    install_with(document, config, move |path| {
        if let Err(e) = location.set_href(path) {
            logging::warn("splash redirect", &BehaviorError::dom(&e));
        }
    })
}

/// Schedule `navigate(redirect_path)` if the splash element exists.
pub fn install_with<F>(document: &Document, config: &BehaviorConfig, navigate: F) -> bool
where
    F: FnOnce(&str) + 'static,
{
    if document.get_element_by_id(&config.splash_id).is_none() {
        return false;
    }

    let path = config.redirect_path.clone();
    dom::schedule(config.splash_delay_ms, move || navigate(&path));
    true
}
