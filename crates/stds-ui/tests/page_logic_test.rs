//! Integration tests for the browser-independent page logic
//!
//! These exercise the public pure API the way the DOM layer drives it:
//! configuration from a page override block, masking of typed input, and
//! ripple placement for a click.

use stds_ui::dispatch::ClickTarget;
use stds_ui::ripple::{RippleGeometry, keyframes_css};
use stds_ui::{BehaviorConfig, BehaviorError, sanitize};

#[test]
fn given_page_override_when_loaded_then_behaviours_use_it() -> Result<(), BehaviorError> {
    let config = BehaviorConfig::from_json(
        r#"{
            "token_max_len": 4,
            "ripple_scale": 3.0,
            "copy_label": "Copied to clipboard"
        }"#,
    )?;

    assert_eq!(sanitize::token("98-76-54", config.token_max_len), "9876");
    assert_eq!(
        keyframes_css(config.ripple_scale),
        "@keyframes ripple { to { transform: scale(3); opacity: 0; } }"
    );
    assert_eq!(config.copy_label, "Copied to clipboard");
    assert_eq!(config.splash_delay_ms, 2900);
    Ok(())
}

#[test]
fn given_keystroke_sequence_when_each_sanitized_then_field_never_holds_invalid_text() {
    let config = BehaviorConfig::default();
    let mut field = String::new();

    for key in "1a2b3c4d5e6f7g8".chars() {
        field.push(key);
        field = sanitize::token(&field, config.token_max_len);
        assert!(field.len() <= 6);
        assert!(field.chars().all(|c| c.is_ascii_digit()), "field held {field:?}");
    }
    assert_eq!(field, "123456");
}

#[test]
fn given_pasted_phone_number_when_sanitized_then_formatting_kept() {
    assert_eq!(sanitize::phone("Tel: +44 20-7946 0958"), " +44 20-7946 0958");
}

#[test]
fn given_click_near_button_corner_when_placed_then_circle_overhangs() {
    let config = BehaviorConfig::default();
    let geometry = RippleGeometry::compute(200.0, 48.0, 100.0, 300.0, 102.0, 302.0);

    assert!((geometry.diameter - 200.0).abs() < f64::EPSILON);
    assert!(geometry.left < 0.0);
    assert!(geometry.top < 0.0);

    let css = geometry.css_text(&config);
    assert!(css.contains("width:200px"));
    assert!(css.contains("left:-98px"));
    assert!(css.contains("top:-98px"));
}

#[test]
fn given_click_on_plain_text_when_routed_then_ignored() {
    let routes: Vec<ClickTarget<u8>> = ClickTarget::classify(None, None);
    assert!(routes.is_empty());
}
