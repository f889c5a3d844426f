//! In-place rendering of markdown display nodes.
//!
//! Each node carrying the source marker has its text content replaced by the
//! sanitized HTML rendering of that text. Rendering is not idempotent: a
//! second pass would read the already-rendered text back as markdown, so
//! [`MarkdownRenderer::render_all`] is meant to run once per page load.

use web_sys::{Document, Element};

use crate::config::SOURCE_SELECTOR;
use crate::core::error::{AppError, RenderError};
use crate::core::{
    AmmoniaSanitizer, ComrakParser, HtmlSanitizer, MarkdownParser, MarkdownPipeline,
};
use crate::utils::dom;

/// Renders display nodes through an injected parse/sanitize pipeline.
pub struct MarkdownRenderer<P, S> {
    pipeline: MarkdownPipeline<P, S>,
}

impl Default for MarkdownRenderer<ComrakParser, AmmoniaSanitizer> {
    fn default() -> Self {
        Self::new(MarkdownPipeline::default())
    }
}

impl<P: MarkdownParser, S: HtmlSanitizer> MarkdownRenderer<P, S> {
    pub fn new(pipeline: MarkdownPipeline<P, S>) -> Self {
        Self { pipeline }
    }

    /// Replace `node`'s content with its rendered markdown.
    pub fn render(&self, node: &Element) -> Result<(), RenderError> {
        let source = node.text_content().unwrap_or_default();
        let html = self.pipeline.render_source(&source)?;
        node.set_inner_html(&html);
        Ok(())
    }

    /// Render every display node in `document`, returning how many were
    /// rendered.
    ///
    /// The first failure aborts the pass; nodes after it keep their source.
    pub fn render_all(&self, document: &Document) -> Result<usize, AppError> {
        let nodes = dom::query_all(document, SOURCE_SELECTOR)?;

        for node in &nodes {
            self.render(node)?;
        }

        tracing::info!(nodes = nodes.len(), "Rendered markdown");
        Ok(nodes.len())
    }
}
