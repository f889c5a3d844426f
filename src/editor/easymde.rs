//! EasyMDE binding.
//!
//! EasyMDE is loaded by the page as a global class. Its presence is checked
//! through `Reflect` before construction so a missing script reports
//! [`EditorError::NotLoaded`] instead of a bare `ReferenceError`.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::{EditorFactory, RichEditor};
use crate::core::EditorOptions;
use crate::core::error::{EditorError, describe_js};

/// Global name the editor class is exposed under.
const EASYMDE_GLOBAL: &str = "EasyMDE";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = EasyMDE)]
    type EasyMdeHandle;

    #[wasm_bindgen(constructor, js_class = "EasyMDE", catch)]
    fn new(options: &JsValue) -> Result<EasyMdeHandle, JsValue>;

    #[wasm_bindgen(method, js_class = "EasyMDE")]
    fn value(this: &EasyMdeHandle) -> String;

    #[wasm_bindgen(method, getter, js_class = "EasyMDE")]
    fn codemirror(this: &EasyMdeHandle) -> CodeMirror;

    type CodeMirror;

    #[wasm_bindgen(method)]
    fn focus(this: &CodeMirror);
}

/// One EasyMDE instance.
pub struct EasyMde {
    handle: EasyMdeHandle,
}

impl RichEditor for EasyMde {
    fn value(&self) -> String {
        self.handle.value()
    }

    fn focus_input(&self) {
        self.handle.codemirror().focus();
    }
}

/// Builds [`EasyMde`] editors from the page global.
#[derive(Debug, Default, Clone, Copy)]
pub struct EasyMdeFactory;

impl EasyMdeFactory {
    /// Whether the EasyMDE script has been loaded on this page.
    pub fn is_available() -> bool {
        Reflect::has(&js_sys::global(), &EASYMDE_GLOBAL.into()).unwrap_or(false)
    }
}

impl EditorFactory for EasyMdeFactory {
    fn create(
        &self,
        host: &HtmlElement,
        options: &EditorOptions,
    ) -> Result<Box<dyn RichEditor>, EditorError> {
        if !Self::is_available() {
            return Err(EditorError::NotLoaded);
        }

        let js_options: Object = serde_wasm_bindgen::to_value(options)
            .map_err(|e| EditorError::InvalidOptions(e.to_string()))?
            .into();
        Reflect::set(&js_options, &"element".into(), host)
            .map_err(|e| EditorError::InvalidOptions(describe_js(&e)))?;

        let handle = EasyMdeHandle::new(&js_options)
            .map_err(|e| EditorError::ConstructionFailed(describe_js(&e)))?;

        Ok(Box::new(EasyMde { handle }))
    }
}
