//! Markdown editing and display glue for server-rendered pages.
//!
//! Once the DOM is ready, two independent passes run:
//!
//! - [`attach::EditorAttacher`] puts a rich editor on every
//!   `[data-markdown-editor]` field and guards required fields on submit.
//! - [`render::MarkdownRenderer`] replaces the text of every
//!   `[data-markdown-source]` node with sanitized HTML.
//!
//! Both passes see the page as it is at that moment only.

pub mod attach;
pub mod config;
pub mod core;
pub mod editor;
mod logs;
pub mod render;
pub mod utils;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::attach::EditorAttacher;
use crate::core::error::AppError;
use crate::editor::EasyMdeFactory;
use crate::render::MarkdownRenderer;
use crate::utils::dom::{self, AlertNotifier};

/// Entry point, invoked when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logs::init_logging();

    dom::on_ready(|| {
        if let Err(err) = run() {
            tracing::error!(%err, "Markdown initialization failed");
            wasm_bindgen::throw_val(err.into());
        }
    })
    .map_err(|err| AppError::from(err).into())
}

/// Attach editors, then render display nodes.
pub fn run() -> Result<(), AppError> {
    let document = dom::document()?;

    EditorAttacher::new(EasyMdeFactory).attach_all(&document, Rc::new(AlertNotifier))?;
    MarkdownRenderer::default().render_all(&document)?;

    Ok(())
}
