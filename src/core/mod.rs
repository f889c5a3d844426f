//! Core logic, independent of the live page.
//!
//! This module provides:
//! - [`FieldConfig`] parsed from element metadata
//! - [`SubmitGuard`] and [`run_submit_guard`] for submit-time validation
//! - [`EditorOptions`] for the rich editor constructor
//! - [`MarkdownPipeline`] for parse-then-sanitize rendering

pub mod error;
mod field;
mod guard;
mod markdown;
mod toolbar;

pub use field::FieldConfig;
pub use guard::{
    EditorBinding, FieldValue, GuardDecision, Notifier, SubmitGuard, SubmitOutcome,
    run_submit_guard,
};
pub use markdown::{
    AmmoniaSanitizer, ComrakParser, HtmlSanitizer, MarkdownParser, MarkdownPipeline,
};
pub use toolbar::{EditorOptions, ToolbarItem};
