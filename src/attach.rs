//! Rich editor attachment for markdown form fields.
//!
//! Every element carrying the editor marker gets one editor. Fields that live
//! inside a form are grouped per form, and each such form gets exactly one
//! `submit` listener that runs [`run_submit_guard`] over its fields in
//! document order. The listener goes in as soon as the form's first editor
//! exists, so a later construction failure never leaves an editor unguarded.
//!
//! Discovery is a one-shot snapshot taken when [`EditorAttacher::attach_all`]
//! runs; fields inserted afterwards are not picked up.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
};

use crate::config::{EDITOR_SELECTOR, REQUIRED_ATTR, REQUIRED_MESSAGE_ATTR};
use crate::core::error::{AppError, DomError, EditorError};
use crate::core::{
    EditorBinding, EditorOptions, FieldConfig, FieldValue, Notifier, SubmitOutcome,
    run_submit_guard,
};
use crate::editor::EditorFactory;
use crate::utils::dom;

// ============================================================================
// Host Fields
// ============================================================================

/// A form control that can host a markdown editor.
#[derive(Debug, Clone)]
pub enum HostField {
    TextArea(HtmlTextAreaElement),
    Input(HtmlInputElement),
}

impl HostField {
    /// Wrap `element` if it is a form control that carries a value.
    pub fn from_element(element: Element) -> Option<Self> {
        match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(textarea) => Some(Self::TextArea(textarea)),
            Err(element) => element.dyn_into::<HtmlInputElement>().ok().map(Self::Input),
        }
    }

    pub fn element(&self) -> &HtmlElement {
        match self {
            Self::TextArea(el) => el.as_ref(),
            Self::Input(el) => el.as_ref(),
        }
    }

    /// The enclosing form, if any.
    pub fn form(&self) -> Option<HtmlFormElement> {
        match self {
            Self::TextArea(el) => el.form(),
            Self::Input(el) => el.form(),
        }
    }

    /// Validation settings from the field's attributes.
    pub fn config(&self) -> FieldConfig {
        let element = self.element();
        FieldConfig::from_attributes(
            element.get_attribute(REQUIRED_ATTR).as_deref(),
            element.get_attribute(REQUIRED_MESSAGE_ATTR).as_deref(),
        )
    }
}

impl FieldValue for HostField {
    fn set_value(&self, value: &str) {
        match self {
            Self::TextArea(el) => el.set_value(value),
            Self::Input(el) => el.set_value(value),
        }
    }
}

// ============================================================================
// Attacher
// ============================================================================

/// Counts from one attachment pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttachReport {
    /// Editors created.
    pub editors: usize,
    /// Forms that received a submit guard.
    pub guarded_forms: usize,
    /// Marked elements that are not form controls.
    pub skipped: usize,
}

type Bindings = Rc<RefCell<Vec<EditorBinding<HostField>>>>;

/// Bindings grouped under the form that owns them. The form's submit
/// listener shares `bindings`.
struct FormGuard {
    form: HtmlFormElement,
    bindings: Bindings,
}

/// Attaches editors built by `E` to marked fields.
pub struct EditorAttacher<E> {
    factory: E,
    options: EditorOptions,
}

impl<E: EditorFactory> EditorAttacher<E> {
    pub fn new(factory: E) -> Self {
        Self::with_options(factory, EditorOptions::default())
    }

    pub fn with_options(factory: E, options: EditorOptions) -> Self {
        Self { factory, options }
    }

    /// Create an editor over `field` and pair the two.
    pub fn attach(&self, field: HostField) -> Result<EditorBinding<HostField>, EditorError> {
        let editor = self.factory.create(field.element(), &self.options)?;
        let config = field.config();
        Ok(EditorBinding::new(field, editor, config))
    }

    /// Attach to every marked field in `document` and guard their forms.
    ///
    /// An editor construction failure aborts the pass.
    pub fn attach_all(
        &self,
        document: &Document,
        notifier: Rc<dyn Notifier>,
    ) -> Result<AttachReport, AppError> {
        let mut report = AttachReport::default();
        let mut guards: Vec<FormGuard> = Vec::new();

        for element in dom::query_all(document, EDITOR_SELECTOR)? {
            let Some(field) = HostField::from_element(element.clone()) else {
                tracing::warn!(
                    tag = %element.tag_name(),
                    "Skipping markdown editor marker on non-field element"
                );
                report.skipped += 1;
                continue;
            };

            let form = field.form();
            let binding = self.attach(field)?;
            report.editors += 1;

            let Some(form) = form else {
                continue;
            };

            let existing = guards
                .iter()
                .find(|g| g.form.is_same_node(Some(form.as_ref())))
                .map(|g| Rc::clone(&g.bindings));

            let bindings = match existing {
                Some(bindings) => bindings,
                None => {
                    let bindings = Bindings::default();
                    install_submit_guard(&form, Rc::clone(&bindings), Rc::clone(&notifier))?;
                    report.guarded_forms += 1;
                    guards.push(FormGuard {
                        form,
                        bindings: Rc::clone(&bindings),
                    });
                    bindings
                }
            };
            bindings.borrow_mut().push(binding);
        }

        tracing::info!(
            editors = report.editors,
            forms = report.guarded_forms,
            skipped = report.skipped,
            "Attached markdown editors"
        );
        Ok(report)
    }
}

/// Register the `submit` listener for one form.
///
/// # Note
/// The closure shares the form's bindings and is intentionally leaked using
/// `forget()`; it lives as long as the page does.
fn install_submit_guard(
    form: &HtmlFormElement,
    bindings: Bindings,
    notifier: Rc<dyn Notifier>,
) -> Result<(), DomError> {
    let closure = Closure::wrap(Box::new(move |event: Event| {
        if run_submit_guard(&bindings.borrow(), notifier.as_ref()) == SubmitOutcome::Cancelled {
            event.prevent_default();
            event.stop_immediate_propagation();
        }
    }) as Box<dyn FnMut(Event)>);

    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
        .map_err(|_| DomError::ListenerFailed("submit"))?;

    closure.forget();
    Ok(())
}
