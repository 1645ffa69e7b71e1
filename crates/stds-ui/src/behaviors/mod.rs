//! Page behaviours
//!
//! Each submodule installs one self-contained behaviour. [`install_all`]
//! wires them in turn; a failure in one is logged and does not stop the rest.
//! Clicks go through a single document-level listener ([`install_click_dispatch`])
//! that routes to the ripple and copy handlers.

pub mod alerts;
pub mod copy;
pub mod inputs;
pub mod ripple;
pub mod splash;


use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, MouseEvent, Window};

use crate::config::BehaviorConfig;
use crate::dispatch::ClickTarget;
use crate::dom;
use crate::error::Result;
use crate::logging;

/// What got wired on this page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub splash_scheduled: bool,
    pub token_fields: usize,
    pub phone_fields: usize,
    pub keyframes_inserted: bool,
    pub click_dispatch: bool,
    pub alerts_scheduled: usize,
    pub token_display: bool,
}

/// Install every behaviour on `document`.
pub fn install_all(window: &Window, document: &Document, config: &Rc<BehaviorConfig>) -> InstallReport {
    let report = InstallReport {
        splash_scheduled: splash::install(window, document, config),
        token_fields: report_failure("token fields", inputs::install_token_fields(document, config))
            .unwrap_or_default(),
        phone_fields: report_failure("phone fields", inputs::install_phone_fields(document, config))
            .unwrap_or_default(),
        keyframes_inserted: report_failure("ripple keyframes", ripple::ensure_keyframes(document, config))
            .unwrap_or_default(),
        click_dispatch: report_failure(
            "click dispatch",
            install_click_dispatch(window, document, Rc::clone(config)),
        )
        .is_some(),
        alerts_scheduled: report_failure("alerts", alerts::install(document, config))
            .unwrap_or_default(),
        token_display: report_failure("token display", copy::prepare(document, config))
            .flatten()
            .is_some(),
    };

    logging::debug(config, &format!("behaviours installed: {report:?}"));
    report
}

/// Register the page-wide click listener.
///
/// # Errors
///
/// Returns an error if the listener cannot be added.
pub fn install_click_dispatch(
    window: &Window,
    document: &Document,
    config: Rc<BehaviorConfig>,
) -> Result<()> {
    let window = window.clone();
    let doc = document.clone();
    dom::listen(document, "click", move |event| {
        for route in route_click(&event, &config) {
            handle(&window, &doc, &event, route, &config);
        }
    })
}

fn route_click(event: &Event, config: &BehaviorConfig) -> Vec<ClickTarget<web_sys::Element>> {
    let Some(target) = dom::event_element(event) else {
        return Vec::new();
    };

    let button = report_failure("ripple", dom::closest(&target, &config.button_selector)).flatten();
    let token_display = dom::closest_with_id(&target, &config.token_display_id);
    ClickTarget::classify(button, token_display)
}

fn handle(
    window: &Window,
    document: &Document,
    event: &Event,
    route: ClickTarget<web_sys::Element>,
    config: &Rc<BehaviorConfig>,
) {
    match route {
        ClickTarget::Button(button) => {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let played = ripple::play(
                window,
                document,
                &button,
                f64::from(mouse.client_x()),
                f64::from(mouse.client_y()),
                config,
            );
            report_failure("ripple", played);
        }
        ClickTarget::TokenDisplay(display) => {
            let window = window.clone();
            let config = Rc::clone(config);
            spawn_local(async move {
                let debug_config = Rc::clone(&config);
                let copied = copy::copy_token(display, config, |text| {
                    copy::write_clipboard(window, text)
                })
                .await;
                // Clipboard failures are silent on the page
                if let Err(e) = copied {
                    logging::debug(&debug_config, &format!("token not copied: {e}"));
                }
            });
        }
    }
}

fn report_failure<T>(context: &str, result: Result<T>) -> Option<T> {
    result.map_err(|e| logging::warn(context, &e)).ok()
}
