//! Alert auto-dismiss
//!
//! visible --(alert_delay_ms)--> fading --(alert_fade_ms)--> removed

use web_sys::{Document, Element};

use crate::config::BehaviorConfig;
use crate::dom;
use crate::error::Result;
use crate::logging;

/// Schedule the fade-out and removal of every alert present now.
///
/// Returns the number of alerts scheduled.
///
/// # Errors
///
/// Returns an error if the alert selector is invalid.
pub fn install(document: &Document, config: &BehaviorConfig) -> Result<usize> {
    let alerts = dom::query_all(document, &config.alert_selector)?;
    let count = alerts.len();

    for alert in alerts {
        let fade_ms = config.alert_fade_ms;
        dom::schedule(config.alert_delay_ms, move || dismiss(alert, fade_ms));
    }
    Ok(count)
}

/// Start the opacity fade on `alert` and remove it once the fade completes
pub fn dismiss(alert: Element, fade_ms: u32) {
    if let Err(e) = fade(&alert, fade_ms) {
        // Not an HTML element or styles rejected: skip straight to removal
        logging::warn("alert fade", &e);
    }
    dom::schedule(fade_ms, move || alert.remove());
}

/// CSS `transition` value for a fade of `fade_ms`
#[must_use]
pub fn fade_transition(fade_ms: u32) -> String {
    format!("opacity {}s", f64::from(fade_ms) / 1000.0)
}

fn fade(alert: &Element, fade_ms: u32) -> Result<()> {
    let html = dom::as_html(alert)?;
    dom::set_style(&html, "transition", &fade_transition(fade_ms))?;
    dom::set_style(&html, "opacity", "0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_fade_then_transition_is_half_second() {
        assert_eq!(fade_transition(500), "opacity 0.5s");
    }

    #[test]
    fn given_whole_second_fade_then_no_fraction() {
        assert_eq!(fade_transition(2000), "opacity 2s");
    }
}
