//! Token and phone input masking
//!
//! Each matching `<input>` gets an `input` listener that rewrites the whole
//! value with its sanitised form. Reassigning the value moves the caret to
//! the end of the field on every keystroke; that is the current behaviour
//! and is kept as is.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::config::BehaviorConfig;
use crate::dom;
use crate::error::Result;
use crate::logging;
use crate::sanitize;

/// Bind the digits-only, length-limited filter to every token field.
///
/// Returns the number of fields bound.
///
/// # Errors
///
/// Returns an error if the selector is invalid or a listener cannot be added.
pub fn install_token_fields(document: &Document, config: &Rc<BehaviorConfig>) -> Result<usize> {
    let max_len = config.token_max_len;
    let debug_config = Rc::clone(config);
    bind_all(document, &config.token_input_selector, move |value| {
        let clean = sanitize::token(value, max_len);
        if sanitize::needs_rewrite(value, &clean) {
            logging::debug(&debug_config, "token field filtered");
        }
        clean
    })
}

/// Bind the digit/space/`+`/`-` filter to every telephone field.
///
/// Returns the number of fields bound.
///
/// # Errors
///
/// Returns an error if the selector is invalid or a listener cannot be added.
pub fn install_phone_fields(document: &Document, config: &Rc<BehaviorConfig>) -> Result<usize> {
    bind_all(document, &config.phone_input_selector, sanitize::phone)
}

fn bind_all<F>(document: &Document, selector: &str, filter: F) -> Result<usize>
where
    F: Fn(&str) -> String + 'static,
{
    let filter = Rc::new(filter);
    let inputs: Vec<HtmlInputElement> = dom::query_all(document, selector)?
        .into_iter()
        .filter_map(|element: Element| element.dyn_into::<HtmlInputElement>().ok())
        .collect();

    for input in &inputs {
        bind(input, Rc::clone(&filter))?;
    }
    Ok(inputs.len())
}

/// Rewrite `input`'s value through `filter` on every `input` event
///
/// # Errors
///
/// Returns an error if the listener cannot be added.
pub fn bind<F>(input: &HtmlInputElement, filter: Rc<F>) -> Result<()>
where
    F: Fn(&str) -> String + 'static,
{
    let field = input.clone();
    dom::listen(input, "input", move |_| {
        let value = field.value();
        field.set_value(&(*filter)(&value));
    })
}
