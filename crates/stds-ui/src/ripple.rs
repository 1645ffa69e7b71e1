//! Ripple geometry and styling
//!
//! Pure calculations for the click ripple: circle size and placement relative
//! to the button, the inline style for the overlay, and the keyframes rule.

use crate::config::BehaviorConfig;

/// Animation name shared by the overlay style and the injected keyframes
pub const ANIMATION_NAME: &str = "ripple";

/// Circle placement inside the clicked button, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    /// Circle diameter: the larger of the button's client width and height
    pub diameter: f64,
    /// Offset of the circle's left edge from the button's left edge
    pub left: f64,
    /// Offset of the circle's top edge from the button's top edge
    pub top: f64,
}

impl RippleGeometry {
    /// Centre a circle on the click point.
    ///
    /// `rect_left`/`rect_top` are the button's bounding box origin and
    /// `click_x`/`click_y` the event's client coordinates.
    #[must_use]
    pub fn compute(
        client_width: f64,
        client_height: f64,
        rect_left: f64,
        rect_top: f64,
        click_x: f64,
        click_y: f64,
    ) -> Self {
        let diameter = client_width.max(client_height).max(0.0);
        let radius = diameter / 2.0;

        Self {
            diameter,
            left: click_x - rect_left - radius,
            top: click_y - rect_top - radius,
        }
    }

    /// Centre of the circle relative to the button
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        let radius = self.diameter / 2.0;
        (self.left + radius, self.top + radius)
    }

    /// Inline `style` text for the overlay element
    #[must_use]
    pub fn css_text(&self, config: &BehaviorConfig) -> String {
        [
            "position:absolute".to_string(),
            "border-radius:50%".to_string(),
            format!("background:{}", config.ripple_color),
            "pointer-events:none".to_string(),
            "transform:scale(0)".to_string(),
            format!(
                "animation:{ANIMATION_NAME} {}s linear",
                millis_to_secs(config.ripple_duration_ms)
            ),
            format!("width:{}px", self.diameter),
            format!("height:{}px", self.diameter),
            format!("left:{}px", self.left),
            format!("top:{}px", self.top),
        ]
        .join(";")
    }
}

/// `@keyframes` rule growing the circle to `scale` while fading it out
#[must_use]
pub fn keyframes_css(scale: f64) -> String {
    format!("@keyframes {ANIMATION_NAME} {{ to {{ transform: scale({scale}); opacity: 0; }} }}")
}

/// Only unpositioned buttons need `position: relative` to contain the overlay
#[must_use]
pub fn needs_positioning(computed_position: &str) -> bool {
    computed_position.trim().eq_ignore_ascii_case("static")
}

fn millis_to_secs(ms: u32) -> f64 {
    f64::from(ms) / 1000.0
}
