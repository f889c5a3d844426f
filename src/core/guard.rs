//! Submit-time validation for editor-backed fields.
//!
//! The decision logic is separated from native event cancellation: a
//! [`SubmitGuard`] only answers "proceed" or "block with this message", and
//! [`run_submit_guard`] applies those answers to the bindings of one form
//! through the [`FieldValue`], [`RichEditor`] and [`Notifier`] capabilities.
//! The DOM layer in [`crate::attach`] turns a [`SubmitOutcome::Cancelled`]
//! into `preventDefault` + `stopImmediatePropagation`.

use crate::editor::RichEditor;

use super::FieldConfig;

// ============================================================================
// Capabilities
// ============================================================================

/// Write access to the underlying form field.
pub trait FieldValue {
    fn set_value(&self, value: &str);
}

/// Blocking, synchronous user notification.
pub trait Notifier {
    fn notify(&self, message: &str);
}

// ============================================================================
// Guard Decision
// ============================================================================

/// What should happen to a submission given one field's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Submit with this (trimmed) value.
    Proceed { value: String },
    /// Cancel the submission and show `message`.
    Block { value: String, message: String },
}

impl GuardDecision {
    /// The trimmed value that flows back into the field either way.
    pub fn value(&self) -> &str {
        match self {
            Self::Proceed { value } | Self::Block { value, .. } => value,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Block { .. })
    }
}

/// Non-empty rule for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitGuard {
    config: FieldConfig,
}

impl SubmitGuard {
    pub fn new(config: FieldConfig) -> Self {
        Self { config }
    }

    /// Decide on a raw editor value.
    pub fn evaluate(&self, raw: &str) -> GuardDecision {
        let value = raw.trim().to_string();

        if self.config.required && value.is_empty() {
            GuardDecision::Block {
                value,
                message: self.config.required_message.clone(),
            }
        } else {
            GuardDecision::Proceed { value }
        }
    }
}

// ============================================================================
// Bindings
// ============================================================================

/// One editable field paired with the rich editor attached to it.
pub struct EditorBinding<F> {
    field: F,
    editor: Box<dyn RichEditor>,
    guard: SubmitGuard,
}

impl<F: FieldValue> EditorBinding<F> {
    pub fn new(field: F, editor: Box<dyn RichEditor>, config: FieldConfig) -> Self {
        Self {
            field,
            editor,
            guard: SubmitGuard::new(config),
        }
    }

    /// Copy the trimmed editor value into the field and decide on it.
    pub fn sync(&self) -> GuardDecision {
        let decision = self.guard.evaluate(&self.editor.value());
        self.field.set_value(decision.value());
        decision
    }
}

/// Result of running the guard for a whole form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Proceed,
    Cancelled,
}

/// Sync every binding of a form in order, stopping at the first one that
/// blocks.
///
/// A blocking binding gets its message shown through `notifier` and its
/// editor focused; later bindings are left untouched.
pub fn run_submit_guard<F: FieldValue>(
    bindings: &[EditorBinding<F>],
    notifier: &dyn Notifier,
) -> SubmitOutcome {
    for binding in bindings {
        if let GuardDecision::Block { message, .. } = binding.sync() {
            tracing::debug!(%message, "Blocked submission of empty required field");
            notifier.notify(&message);
            binding.editor.focus_input();
            return SubmitOutcome::Cancelled;
        }
    }

    SubmitOutcome::Proceed
}

// ============================================================================
// Tests
// ============================================================================
