//! Custom error types for the application.
//!
//! Every error here is fatal for the pass that raised it. At the wasm
//! boundary they become `JsValue`s so the browser reports them as uncaught
//! exceptions.
//!
//! - [`DomError`] - browser globals or elements that are not available
//! - [`EditorError`] - rich editor construction failures
//! - [`RenderError`] - markdown parsing or sanitization failures

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Errors from reaching into the page.
#[derive(Debug, Clone, Error)]
pub enum DomError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Window has no document attached
    #[error("Document not available")]
    NoDocument,
    /// `querySelectorAll` rejected the selector
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
    /// Registering an event listener failed
    #[error("Failed to register '{0}' listener")]
    ListenerFailed(&'static str),
}

/// Errors from instantiating the rich editor.
#[derive(Debug, Clone, Error)]
pub enum EditorError {
    /// The editor library is not loaded on the page
    #[error("Rich editor library not loaded")]
    NotLoaded,
    /// Editor options could not be converted for the constructor
    #[error("Invalid editor options: {0}")]
    InvalidOptions(String),
    /// The editor constructor threw
    #[error("Rich editor construction failed: {0}")]
    ConstructionFailed(String),
}

/// Errors from turning markdown source into display markup.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// The markdown parser failed on the input
    #[error("Markdown parse failed: {0}")]
    Parse(String),
    /// The sanitizer failed on the parsed HTML
    #[error("HTML sanitization failed: {0}")]
    Sanitize(String),
}

/// Top-level error for a page initialization pass.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error(transparent)]
    Editor(#[from] EditorError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Render a thrown JS value as text for error messages.
pub(crate) fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
