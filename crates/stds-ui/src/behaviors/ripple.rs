//! Button ripple overlay

use web_sys::{Document, Element, Window};

use crate::config::BehaviorConfig;
use crate::dom;
use crate::error::{BehaviorError, Result};
use crate::ripple::{RippleGeometry, keyframes_css, needs_positioning};

/// Slack after the animation before the fallback removes the overlay
pub const FALLBACK_GRACE_MS: u32 = 50;

/// When the fallback removal fires if `animationend` never does
#[must_use]
pub const fn fallback_removal_ms(config: &BehaviorConfig) -> u32 {
    config.ripple_duration_ms.saturating_add(FALLBACK_GRACE_MS)
}

/// Inject the ripple keyframes once per document.
///
/// Returns `true` if the `<style>` element was inserted by this call.
///
/// # Errors
///
/// Returns an error if the style element cannot be created or appended.
pub fn ensure_keyframes(document: &Document, config: &BehaviorConfig) -> Result<bool> {
    dom::ensure_style(
        document,
        &config.keyframes_style_id,
        &keyframes_css(config.ripple_scale),
    )
}

/// Append a ripple to `button` centred on the click at (`click_x`, `click_y`).
///
/// The overlay removes itself on `animationend`, or shortly after the
/// animation's duration when animations are disabled and the event never
/// fires.
///
/// # Errors
///
/// Returns an error if the overlay cannot be created, styled or appended.
pub fn play(
    window: &Window,
    document: &Document,
    button: &Element,
    click_x: f64,
    click_y: f64,
    config: &BehaviorConfig,
) -> Result<Element> {
    let rect = button.get_bounding_client_rect();
    let geometry = RippleGeometry::compute(
        f64::from(button.client_width()),
        f64::from(button.client_height()),
        rect.left(),
        rect.top(),
        click_x,
        click_y,
    );

    let circle = document
        .create_element("span")
        .map_err(|e| BehaviorError::dom(&e))?;
    circle
        .set_attribute("style", &geometry.css_text(config))
        .map_err(|e| BehaviorError::dom(&e))?;

    let host = dom::as_html(button)?;
    if needs_positioning(&dom::computed_position(window, button)?) {
        dom::set_style(&host, "position", "relative")?;
    }
    dom::set_style(&host, "overflow", "hidden")?;
    button
        .append_child(&circle)
        .map_err(|e| BehaviorError::dom(&e))?;

    let overlay = circle.clone();
    dom::on_event_or_timeout(
        &circle,
        "animationend",
        fallback_removal_ms(config),
        move || overlay.remove(),
    )?;

    Ok(circle)
}
