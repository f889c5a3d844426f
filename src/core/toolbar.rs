//! Rich editor configuration.
//!
//! [`EditorOptions`] serializes to the options object the editor constructor
//! expects, minus the host element, which is attached separately because it
//! is a live DOM handle.

use serde::{Serialize, Serializer};

use crate::config::{SPELL_CHECKER, STATUS_BAR, TOOLBAR};

/// A toolbar entry, serialized under the editor's built-in button name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarItem {
    Bold,
    Italic,
    Heading,
    Quote,
    UnorderedList,
    OrderedList,
    Link,
    Image,
    Code,
    Table,
    HorizontalRule,
    Preview,
    SideBySide,
    Fullscreen,
    /// Visual divider between button groups.
    Separator,
}

impl ToolbarItem {
    pub fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Heading => "heading",
            Self::Quote => "quote",
            Self::UnorderedList => "unordered-list",
            Self::OrderedList => "ordered-list",
            Self::Link => "link",
            Self::Image => "image",
            Self::Code => "code",
            Self::Table => "table",
            Self::HorizontalRule => "horizontal-rule",
            Self::Preview => "preview",
            Self::SideBySide => "side-by-side",
            Self::Fullscreen => "fullscreen",
            Self::Separator => "|",
        }
    }
}

impl Serialize for ToolbarItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Constructor options for a rich editor instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    pub spell_checker: bool,
    pub status: bool,
    pub toolbar: Vec<ToolbarItem>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            spell_checker: SPELL_CHECKER,
            status: STATUS_BAR,
            toolbar: TOOLBAR.to_vec(),
        }
    }
}
