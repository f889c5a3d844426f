//! Application configuration.
//!
//! Centralizes the constants that bind this crate to server-rendered markup:
//! activation markers, field attributes, and the editor setup shared by every
//! attached field.

use crate::core::ToolbarItem;

// =============================================================================
// Activation Markers
// =============================================================================

/// Selector for form fields that get a rich markdown editor.
pub const EDITOR_SELECTOR: &str = "[data-markdown-editor]";

/// Selector for nodes whose text content is markdown to be rendered.
pub const SOURCE_SELECTOR: &str = "[data-markdown-source]";

// =============================================================================
// Per-field Metadata
// =============================================================================

/// Attribute holding the required flag.
pub const REQUIRED_ATTR: &str = "data-markdown-required";

/// Attribute holding the validation message.
pub const REQUIRED_MESSAGE_ATTR: &str = "data-markdown-required-message";

/// Message shown when a required field is submitted empty and the field
/// does not configure its own.
pub const DEFAULT_REQUIRED_MESSAGE: &str = "Please fill out this field.";

// =============================================================================
// Editor Configuration
// =============================================================================

/// Toolbar shown on every editor, in display order.
pub const TOOLBAR: &[ToolbarItem] = &[
    ToolbarItem::Bold,
    ToolbarItem::Italic,
    ToolbarItem::Heading,
    ToolbarItem::Separator,
    ToolbarItem::Quote,
    ToolbarItem::UnorderedList,
    ToolbarItem::OrderedList,
    ToolbarItem::Separator,
    ToolbarItem::Link,
    ToolbarItem::Image,
    ToolbarItem::Code,
    ToolbarItem::Table,
    ToolbarItem::HorizontalRule,
    ToolbarItem::Separator,
    ToolbarItem::Preview,
    ToolbarItem::SideBySide,
    ToolbarItem::Fullscreen,
];

/// Whether the editor runs its spell checker.
pub const SPELL_CHECKER: bool = false;

/// Whether the editor shows its status bar.
pub const STATUS_BAR: bool = false;

// =============================================================================
// Logging
// =============================================================================

/// Directive string for the console log filter.
pub const LOG_FILTER: &str = "error,markdown_glue=debug";
