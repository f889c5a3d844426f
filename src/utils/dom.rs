//! DOM and Web API utility functions.
//!
//! Provides consistent access to browser APIs with errors instead of panics.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, Window};

use crate::core::Notifier;
use crate::core::error::DomError;

/// Get the browser window object.
#[inline]
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Get the page document.
#[inline]
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// All elements matching `selector` under `root`, in document order.
///
/// The result is a snapshot: elements inserted later are not included.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = root
        .query_selector_all(selector)
        .map_err(|_| DomError::InvalidSelector(selector.to_string()))?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Run `callback` once the DOM is parsed.
///
/// Runs immediately when the document has already left the `loading` state,
/// otherwise on `DOMContentLoaded`.
///
/// # Note
/// The listener closure is intentionally leaked using `forget()`; it fires at
/// most once and the page owns it from then on.
pub fn on_ready(callback: impl FnOnce() + 'static) -> Result<(), DomError> {
    let document = document()?;

    if document.ready_state() != "loading" {
        callback();
        return Ok(());
    }

    let closure = Closure::once(callback);
    document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
        .map_err(|_| DomError::ListenerFailed("DOMContentLoaded"))?;
    closure.forget();
    Ok(())
}

/// Notifier backed by `window.alert`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        match window() {
            Ok(window) => {
                if window.alert_with_message(message).is_err() {
                    tracing::warn!(%message, "window.alert failed");
                }
            }
            Err(err) => tracing::warn!(%err, %message, "Cannot show validation message"),
        }
    }
}
