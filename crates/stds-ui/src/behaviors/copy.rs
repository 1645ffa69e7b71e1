//! Token copy-on-click
//!
//! The token display gets a tooltip and pointer cursor at load. A click
//! writes the trimmed token to the clipboard; on success the display shows
//! the copy label in a larger font for `copy_feedback_ms`, then reverts.
//! Clipboard failures are silent.

use std::future::Future;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::BehaviorConfig;
use crate::dom;
use crate::error::{BehaviorError, Result, describe_js};
use crate::logging;

/// Marks a token display with a copy in flight or the copy label on screen
pub const FEEDBACK_ATTR: &str = "data-stds-copied";

/// Give the token display its tooltip and pointer cursor.
///
/// Returns the display element, or `None` when the page has none.
///
/// # Errors
///
/// Returns an error if the display's inline style cannot be written.
pub fn prepare(document: &Document, config: &BehaviorConfig) -> Result<Option<Element>> {
    let Some(display) = document.get_element_by_id(&config.token_display_id) else {
        return Ok(None);
    };

    let html = dom::as_html(&display)?;
    html.set_title(&config.copy_tooltip);
    dom::set_style(&html, "cursor", "pointer")?;
    Ok(Some(display))
}

/// Write `text` through `navigator.clipboard`.
///
/// # Errors
///
/// Returns `BehaviorError::Clipboard` when the Clipboard API is missing
/// (insecure context, old browser) or the write is rejected.
pub async fn write_clipboard(window: Window, text: String) -> Result<()> {
    let navigator = window.navigator();
    let available = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false);
    if !available {
        return Err(BehaviorError::Clipboard(
            "navigator.clipboard is not available".to_string(),
        ));
    }

    JsFuture::from(navigator.clipboard().write_text(&text))
        .await
        .map(|_| ())
        .map_err(|e| BehaviorError::Clipboard(describe_js(&e)))
}

/// Copy the display's trimmed text with `write` and show the confirmation.
///
/// The display is marked with [`FEEDBACK_ATTR`] from the click until the
/// confirmation is reverted, so clicks landing while the clipboard write is
/// pending or the label is up are ignored.
///
/// Returns `Ok(true)` when the confirmation was shown and its revert
/// scheduled, `Ok(false)` when the click was ignored.
///
/// # Errors
///
/// Returns the error from `write` (the display is left untouched and the
/// mark cleared), or a DOM error if the display cannot be marked or styled.
pub async fn copy_token<W, Fut>(display: Element, config: Rc<BehaviorConfig>, write: W) -> Result<bool>
where
    W: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    if display.has_attribute(FEEDBACK_ATTR) {
        return Ok(false);
    }
    let html = dom::as_html(&display)?;

    let token = display.text_content().unwrap_or_default().trim().to_string();
    display
        .set_attribute(FEEDBACK_ATTR, "")
        .map_err(|e| BehaviorError::dom(&e))?;

    if let Err(e) = write(token).await {
        clear_mark(&display);
        return Err(e);
    }

    show_feedback(&display, &html, &config)?;
    Ok(true)
}

fn show_feedback(display: &Element, html: &HtmlElement, config: &BehaviorConfig) -> Result<()> {
    let original = display.text_content();

    // Revert first: it must run even if the label styling below fails
    let target = display.clone();
    let host = html.clone();
    dom::schedule(config.copy_feedback_ms, move || {
        target.set_text_content(original.as_deref());
        if let Err(e) = dom::set_style(&host, "font-size", "") {
            logging::warn("copy feedback revert", &e);
        }
        clear_mark(&target);
    });

    display.set_text_content(Some(&config.copy_label));
    dom::set_style(html, "font-size", &config.copy_font_size)
}

fn clear_mark(display: &Element) {
    if let Err(e) = display.remove_attribute(FEEDBACK_ATTR) {
        logging::warn("copy feedback mark", &BehaviorError::dom(&e));
    }
}
