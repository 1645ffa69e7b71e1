//! WASM entry point for the portal page behaviours
//!
//! Trunk compiles this to WASM; the generated loader runs `main` once the
//! module is instantiated, after the page markup has been parsed.

use leptos::logging;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    match stds_ui::run() {
        Ok(Some(_)) => {}
        Ok(None) => logging::log!("[stds] behaviours already installed"),
        Err(e) => logging::warn!("[stds] behaviours not installed: {e}"),
    }
}
