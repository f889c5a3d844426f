//! Browser tests for discovery, attachment, submit guarding and rendering.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use markdown_glue::attach::{AttachReport, EditorAttacher};
use markdown_glue::core::error::EditorError;
use markdown_glue::core::{EditorOptions, Notifier};
use markdown_glue::editor::{EditorFactory, RichEditor};
use markdown_glue::render::MarkdownRenderer;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Event, EventInit, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement,
};

wasm_bindgen_test_configure!(run_in_browser);

// ============================================================================
// Fakes
// ============================================================================

#[derive(Default)]
struct EditorState {
    value: RefCell<String>,
    focused: Cell<usize>,
}

impl EditorState {
    fn type_text(&self, text: &str) {
        *self.value.borrow_mut() = text.to_string();
    }
}

struct FakeEditor(Rc<EditorState>);

impl RichEditor for FakeEditor {
    fn value(&self) -> String {
        self.0.value.borrow().clone()
    }

    fn focus_input(&self) {
        self.0.focused.set(self.0.focused.get() + 1);
    }
}

/// Hands out editors whose value starts as the host's value and can be
/// changed by the test afterwards.
#[derive(Clone, Default)]
struct FakeFactory {
    created: Rc<RefCell<Vec<Rc<EditorState>>>>,
    fail_after: Option<usize>,
}

impl FakeFactory {
    /// Builds `count` editors, then fails every later construction.
    fn failing_after(count: usize) -> Self {
        Self {
            fail_after: Some(count),
            ..Self::default()
        }
    }

    fn editor(&self, index: usize) -> Rc<EditorState> {
        Rc::clone(&self.created.borrow()[index])
    }
}

impl EditorFactory for FakeFactory {
    fn create(
        &self,
        host: &HtmlElement,
        _options: &EditorOptions,
    ) -> Result<Box<dyn RichEditor>, EditorError> {
        if self
            .fail_after
            .is_some_and(|count| self.created.borrow().len() >= count)
        {
            return Err(EditorError::ConstructionFailed("boom".to_string()));
        }

        let initial = if let Some(textarea) = host.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else if let Some(input) = host.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else {
            String::new()
        };
        let state = Rc::new(EditorState {
            value: RefCell::new(initial),
            focused: Cell::new(0),
        });
        self.created.borrow_mut().push(Rc::clone(&state));
        Ok(Box::new(FakeEditor(state)))
    }
}

struct BrokenFactory;

impl EditorFactory for BrokenFactory {
    fn create(
        &self,
        _host: &HtmlElement,
        _options: &EditorOptions,
    ) -> Result<Box<dyn RichEditor>, EditorError> {
        Err(EditorError::ConstructionFailed("boom".to_string()))
    }
}

#[derive(Default)]
struct RecordingNotifier(RefCell<Vec<String>>);

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Replace the body with `html` and return the document.
fn page(html: &str) -> Document {
    let document = document();
    document.body().unwrap().set_inner_html(html);
    document
}

fn textarea(document: &Document, id: &str) -> HtmlTextAreaElement {
    document
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlTextAreaElement>()
        .unwrap()
}

fn input(document: &Document, id: &str) -> HtmlInputElement {
    document
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap()
}

/// Add a plain `submit` listener after the guard; returns its call count.
fn count_submits(form: &HtmlFormElement) -> Rc<Cell<usize>> {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let closure = Closure::wrap(Box::new(move |_event: Event| {
        counter.set(counter.get() + 1);
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
        .unwrap();
    closure.forget();
    calls
}

fn form(document: &Document, id: &str) -> HtmlFormElement {
    document
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlFormElement>()
        .unwrap()
}

/// Dispatch a cancelable submit event; returns `true` if it was not cancelled.
fn submit(form: &HtmlFormElement) -> bool {
    let init = EventInit::new();
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    form.dispatch_event(&event).unwrap()
}

fn attach(document: &Document, factory: &FakeFactory) -> (AttachReport, Rc<RecordingNotifier>) {
    let notifier = Rc::new(RecordingNotifier::default());
    let report = EditorAttacher::new(factory.clone())
        .attach_all(document, notifier.clone())
        .unwrap();
    (report, notifier)
}

// ============================================================================
// Attachment
// ============================================================================

#[wasm_bindgen_test]
fn empty_page_is_a_no_op() {
    let document = page("<p>nothing here</p>");
    let factory = FakeFactory::default();

    let (report, notifier) = attach(&document, &factory);
    let rendered = MarkdownRenderer::default().render_all(&document).unwrap();

    assert_eq!(report, AttachReport::default());
    assert_eq!(rendered, 0);
    assert!(notifier.0.borrow().is_empty());
}

#[wasm_bindgen_test]
fn one_guard_per_form() {
    let document = page(
        r#"<form id="a">
             <textarea id="a1" data-markdown-editor></textarea>
             <textarea id="a2" data-markdown-editor></textarea>
           </form>
           <form id="b"><textarea id="b1" data-markdown-editor></textarea></form>
           <textarea id="loose" data-markdown-editor></textarea>
           <div data-markdown-editor></div>"#,
    );
    let factory = FakeFactory::default();

    let (report, _) = attach(&document, &factory);

    assert_eq!(
        report,
        AttachReport {
            editors: 4,
            guarded_forms: 2,
            skipped: 1,
        }
    );
}

#[wasm_bindgen_test]
fn editor_failure_aborts_the_pass() {
    let document = page(r#"<form><textarea data-markdown-editor></textarea></form>"#);
    let notifier: Rc<dyn Notifier> = Rc::new(RecordingNotifier::default());

    let result = EditorAttacher::new(BrokenFactory).attach_all(&document, notifier);

    assert!(result.is_err());
}

// ============================================================================
// Submit Guard
// ============================================================================

#[wasm_bindgen_test]
fn required_empty_field_cancels_submit() {
    let document = page(
        r#"<form id="f">
             <textarea id="body" data-markdown-editor data-markdown-required="true">stale</textarea>
           </form>"#,
    );
    let factory = FakeFactory::default();
    let (_, notifier) = attach(&document, &factory);
    factory.editor(0).type_text("   \n");

    assert!(!submit(&form(&document, "f")));
    assert_eq!(
        notifier.0.borrow().as_slice(),
        ["Please fill out this field.".to_string()]
    );
    assert_eq!(factory.editor(0).focused.get(), 1);
    assert_eq!(textarea(&document, "body").value(), "");
}

#[wasm_bindgen_test]
fn custom_message_is_shown() {
    let document = page(
        r#"<form id="f">
             <textarea data-markdown-editor
                       data-markdown-required="true"
                       data-markdown-required-message="Describe your project."></textarea>
           </form>"#,
    );
    let factory = FakeFactory::default();
    let (_, notifier) = attach(&document, &factory);

    assert!(!submit(&form(&document, "f")));
    assert_eq!(
        notifier.0.borrow().as_slice(),
        ["Describe your project.".to_string()]
    );
}

#[wasm_bindgen_test]
fn optional_empty_field_submits() {
    let document = page(r#"<form id="f"><textarea data-markdown-editor></textarea></form>"#);
    let factory = FakeFactory::default();
    let (_, notifier) = attach(&document, &factory);

    assert!(submit(&form(&document, "f")));
    assert!(notifier.0.borrow().is_empty());
}

#[wasm_bindgen_test]
fn edited_text_is_written_back_trimmed() {
    let document = page(
        r#"<form id="f">
             <textarea id="body" data-markdown-editor data-markdown-required="true">old</textarea>
           </form>"#,
    );
    let factory = FakeFactory::default();
    attach(&document, &factory);
    factory.editor(0).type_text("  # New title\n\nbody\n");

    assert!(submit(&form(&document, "f")));
    assert_eq!(textarea(&document, "body").value(), "# New title\n\nbody");
}

#[wasm_bindgen_test]
fn untyped_required_field_blocks() {
    let document = page(
        r#"<form id="f">
             <textarea id="body" data-markdown-editor data-markdown-required="true"></textarea>
           </form>"#,
    );
    let factory = FakeFactory::default();
    let (_, notifier) = attach(&document, &factory);

    assert!(!submit(&form(&document, "f")));
    assert_eq!(notifier.0.borrow().len(), 1);
    assert_eq!(factory.editor(0).focused.get(), 1);
}

#[wasm_bindgen_test]
fn blocked_submit_stops_later_listeners() {
    let document = page(
        r#"<form id="f">
             <textarea data-markdown-editor data-markdown-required="true"></textarea>
           </form>"#,
    );
    let factory = FakeFactory::default();
    attach(&document, &factory);
    let form = form(&document, "f");
    let later = count_submits(&form);

    assert!(!submit(&form));
    assert_eq!(later.get(), 0);

    factory.editor(0).type_text("filled in");
    assert!(submit(&form));
    assert_eq!(later.get(), 1);
}

#[wasm_bindgen_test]
fn input_host_is_guarded_and_written_back() {
    let document = page(
        r#"<form id="f">
             <input id="title" data-markdown-editor data-markdown-required="true" value="   ">
           </form>"#,
    );
    let factory = FakeFactory::default();
    let (report, notifier) = attach(&document, &factory);
    assert_eq!(report.editors, 1);
    assert_eq!(report.guarded_forms, 1);

    assert!(!submit(&form(&document, "f")));
    assert_eq!(notifier.0.borrow().len(), 1);
    assert_eq!(input(&document, "title").value(), "");

    factory.editor(0).type_text("  Release notes ");
    assert!(submit(&form(&document, "f")));
    assert_eq!(input(&document, "title").value(), "Release notes");
    assert_eq!(notifier.0.borrow().len(), 1);
}

#[wasm_bindgen_test]
fn field_outside_form_gets_editor_without_guard() {
    let document = page(
        r#"<textarea id="loose" data-markdown-editor data-markdown-required="true"></textarea>
           <form id="other"><input name="q"></form>"#,
    );
    let factory = FakeFactory::default();
    let (report, notifier) = attach(&document, &factory);

    assert_eq!(
        report,
        AttachReport {
            editors: 1,
            guarded_forms: 0,
            skipped: 0,
        }
    );
    assert_eq!(factory.created.borrow().len(), 1);

    assert!(submit(&form(&document, "other")));
    assert!(notifier.0.borrow().is_empty());
    assert_eq!(factory.editor(0).focused.get(), 0);
}

#[wasm_bindgen_test]
fn earlier_editors_stay_guarded_when_a_later_one_fails() {
    let document = page(
        r#"<form id="a">
             <textarea data-markdown-editor data-markdown-required="true"></textarea>
           </form>
           <form id="b"><textarea data-markdown-editor></textarea></form>"#,
    );
    let factory = FakeFactory::failing_after(1);
    let notifier = Rc::new(RecordingNotifier::default());

    let result = EditorAttacher::new(factory.clone()).attach_all(&document, notifier.clone());

    assert!(result.is_err());
    assert!(!submit(&form(&document, "a")));
    assert_eq!(notifier.0.borrow().len(), 1);
}

// ============================================================================
// Rendering
// ============================================================================

#[wasm_bindgen_test]
fn renders_and_sanitizes_display_nodes() {
    let document = page(concat!(
        "<div id=\"n1\" data-markdown-source>\n",
        "**bold**\n\n&lt;script&gt;alert(1)&lt;/script&gt;\n",
        "</div>",
        "<div id=\"n2\" data-markdown-source>   </div>",
    ));

    let rendered = MarkdownRenderer::default().render_all(&document).unwrap();
    assert_eq!(rendered, 2);

    let n1 = document.get_element_by_id("n1").unwrap();
    let html = n1.inner_html();
    assert!(html.contains("<strong>bold</strong>"));
    assert!(n1.query_selector("script").unwrap().is_none());
    assert!(!html.contains("alert(1)"));

    let n2 = document.get_element_by_id("n2").unwrap();
    assert_eq!(n2.inner_html(), "");
}
