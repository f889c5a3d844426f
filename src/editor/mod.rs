//! Rich editor capability.
//!
//! The glue only needs three things from an editor: construct one over a host
//! field, read its current text, and move focus into it. [`EasyMde`] provides
//! them through the page's `EasyMDE` global.

mod easymde;

use web_sys::HtmlElement;

use crate::core::EditorOptions;
use crate::core::error::EditorError;

pub use easymde::{EasyMde, EasyMdeFactory};

/// A live editing surface backed by a form field.
pub trait RichEditor {
    /// Current edited text, untrimmed.
    fn value(&self) -> String;
    /// Move keyboard focus into the editor's input surface.
    fn focus_input(&self);
}

/// Constructs editors over host elements.
pub trait EditorFactory {
    fn create(
        &self,
        host: &HtmlElement,
        options: &EditorOptions,
    ) -> Result<Box<dyn RichEditor>, EditorError>;
}
