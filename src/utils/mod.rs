//! Browser utilities.
//!
//! Provides:
//! - [`dom::query_all`] - snapshot of elements matching a selector
//! - [`dom::on_ready`] - deferral until the DOM is parsed
//! - [`dom::AlertNotifier`] - blocking `window.alert` notifications

pub mod dom;
