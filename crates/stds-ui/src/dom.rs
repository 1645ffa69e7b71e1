//! Thin web-sys layer used by the behaviours
//!
//! Provides functional, panic-free access to the window, element queries,
//! inline styles, event listeners and one-shot timers. All DOM operations
//! return Results; thrown JS values are wrapped in [`BehaviorError::Dom`].

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::{BehaviorError, Result, describe_js};
use crate::logging;

/// Get the global window
///
/// # Errors
///
/// Returns `BehaviorError::WindowUnavailable` outside a browser context.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(BehaviorError::WindowUnavailable)
}

/// Get the window's document
///
/// # Errors
///
/// Returns `BehaviorError::DocumentUnavailable` if the window has none.
pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(BehaviorError::DocumentUnavailable)
}

/// Every element matching `selector`, in document order
///
/// # Errors
///
/// Returns `BehaviorError::InvalidSelector` if the browser rejects the selector.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| BehaviorError::InvalidSelector {
            selector: selector.to_string(),
            reason: describe_js(&e),
        })?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Nearest element (the element itself included) matching `selector`
///
/// # Errors
///
/// Returns `BehaviorError::InvalidSelector` if the browser rejects the selector.
pub fn closest(element: &Element, selector: &str) -> Result<Option<Element>> {
    element
        .closest(selector)
        .map_err(|e| BehaviorError::InvalidSelector {
            selector: selector.to_string(),
            reason: describe_js(&e),
        })
}

/// Element an event was dispatched to; text-node targets resolve to their parent
#[must_use]
pub fn event_element(event: &Event) -> Option<Element> {
    let target = event.target()?;
    match target.dyn_into::<Element>() {
        Ok(element) => Some(element),
        Err(target) => target
            .dyn_into::<web_sys::Node>()
            .ok()
            .and_then(|node| node.parent_element()),
    }
}

/// View an element as an `HtmlElement` for style access
///
/// # Errors
///
/// Returns `BehaviorError::Dom` for non-HTML elements (e.g. SVG).
pub fn as_html(element: &Element) -> Result<HtmlElement> {
    element
        .clone()
        .dyn_into::<HtmlElement>()
        .map_err(|_| BehaviorError::Dom(format!("<{}> is not an HTML element", element.tag_name())))
}

/// Set a single inline style property; an empty value clears it
///
/// # Errors
///
/// Returns `BehaviorError::Dom` if the style declaration rejects the write.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    let style = element.style();
    if value.is_empty() {
        style
            .remove_property(property)
            .map(|_| ())
            .map_err(|e| BehaviorError::dom(&e))
    } else {
        style
            .set_property(property, value)
            .map_err(|e| BehaviorError::dom(&e))
    }
}

/// Resolved `position` of an element
///
/// # Errors
///
/// Returns `BehaviorError::Dom` if the computed style cannot be read.
pub fn computed_position(window: &Window, element: &Element) -> Result<String> {
    window
        .get_computed_style(element)
        .map_err(|e| BehaviorError::dom(&e))?
        .ok_or_else(|| BehaviorError::Dom("no computed style".to_string()))?
        .get_property_value("position")
        .map_err(|e| BehaviorError::dom(&e))
}

/// Attach a listener that lives as long as the page
///
/// # Errors
///
/// Returns `BehaviorError::Dom` if the listener cannot be registered.
pub fn listen<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
        .map_err(|e| BehaviorError::dom(&e))?;
    // Page-lifetime listener: the JS side owns it from here on
    closure.forget();
    Ok(())
}

/// Run `handler` once, on the first `event_type` event or after
/// `fallback_ms`, whichever comes first.
///
/// The listener closure is owned by the fallback timer, which unregisters
/// and drops it when it fires, so nothing outlives the timer.
///
/// # Errors
///
/// Returns `BehaviorError::Dom` if the listener cannot be registered.
pub fn on_event_or_timeout<F>(
    target: &EventTarget,
    event_type: &str,
    fallback_ms: u32,
    handler: F,
) -> Result<()>
where
    F: FnOnce() + 'static,
{
    let pending = Rc::new(RefCell::new(Some(handler)));

    let on_event = Rc::clone(&pending);
    let closure = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        let handler = on_event.borrow_mut().take();
        if let Some(run) = handler {
            run();
        }
    });
    target
        .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
        .map_err(|e| BehaviorError::dom(&e))?;

    let target = target.clone();
    let event_type = event_type.to_string();
    schedule(fallback_ms, move || {
        if let Err(e) =
            target.remove_event_listener_with_callback(&event_type, closure.as_ref().unchecked_ref())
        {
            logging::warn("listener cleanup", &BehaviorError::dom(&e));
        }
        drop(closure);

        let handler = pending.borrow_mut().take();
        if let Some(run) = handler {
            run();
        }
    });
    Ok(())
}

/// Run `callback` once after `millis`; there is no cancellation path.
pub fn schedule<F>(millis: u32, callback: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(millis, callback).forget();
}

/// Insert `<style id=…>` with `css` into `<head>` unless an element with
/// that id already exists.
///
/// Returns `true` when the style element was inserted.
///
/// # Errors
///
/// Returns `BehaviorError::Dom` if the element cannot be created or appended.
pub fn ensure_style(document: &Document, id: &str, css: &str) -> Result<bool> {
    if document.get_element_by_id(id).is_some() {
        return Ok(false);
    }

    let style = document
        .create_element("style")
        .map_err(|e| BehaviorError::dom(&e))?;
    style.set_id(id);
    style.set_text_content(Some(css));

    let head = document
        .head()
        .ok_or_else(|| BehaviorError::Dom("document has no <head>".to_string()))?;
    head.append_child(&style)
        .map_err(|e| BehaviorError::dom(&e))?;

    Ok(true)
}

/// Nearest element (the element itself included) whose `id` equals `id`
#[must_use]
pub fn closest_with_id(element: &Element, id: &str) -> Option<Element> {
    std::iter::successors(Some(element.clone()), |el| el.parent_element())
        .find(|candidate| candidate.id() == id)
}
