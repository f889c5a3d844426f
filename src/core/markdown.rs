//! Markdown rendering pipeline.
//!
//! Parsing and sanitizing are capabilities behind [`MarkdownParser`] and
//! [`HtmlSanitizer`], injected into a [`MarkdownPipeline`] rather than looked
//! up globally. The default pipeline uses `comrak` for GitHub Flavored
//! Markdown and `ammonia` to strip anything unsafe before the result reaches
//! the DOM.

use comrak::Options;

use super::error::RenderError;

/// Converts markdown text to (unsanitized) HTML.
pub trait MarkdownParser {
    fn parse(&self, markdown: &str) -> Result<String, RenderError>;
}

/// Makes HTML safe for insertion into the page.
pub trait HtmlSanitizer {
    fn sanitize(&self, html: &str) -> Result<String, RenderError>;
}

/// GFM parser backed by `comrak`.
///
/// Supports tables, strikethrough (`~~text~~`), bare-URL autolinks and task
/// lists. Raw HTML in the source is passed through untouched; making it safe
/// is the sanitizer's job.
pub struct ComrakParser {
    options: Options<'static>,
}

impl ComrakParser {
    pub fn new() -> Self {
        let mut options = Options::default();
        options.extension.table = true;
        options.extension.strikethrough = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.render.r#unsafe = true;
        Self { options }
    }
}

impl Default for ComrakParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownParser for ComrakParser {
    fn parse(&self, markdown: &str) -> Result<String, RenderError> {
        Ok(comrak::markdown_to_html(markdown, &self.options))
    }
}

/// Sanitizer using `ammonia`'s default allow-list, plus `class` on `<code>`
/// so fenced code keeps its `language-*` hint.
///
/// Removes `<script>`/`<style>` elements with their content, event handler
/// attributes and `javascript:` URLs.
pub struct AmmoniaSanitizer {
    builder: ammonia::Builder<'static>,
}

impl AmmoniaSanitizer {
    pub fn new() -> Self {
        let mut builder = ammonia::Builder::default();
        builder.add_tag_attributes("code", &["class"]);
        Self { builder }
    }
}

impl Default for AmmoniaSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlSanitizer for AmmoniaSanitizer {
    fn sanitize(&self, html: &str) -> Result<String, RenderError> {
        Ok(self.builder.clean(html).to_string())
    }
}

/// Parse then sanitize.
pub struct MarkdownPipeline<P, S> {
    parser: P,
    sanitizer: S,
}

impl<P: MarkdownParser, S: HtmlSanitizer> MarkdownPipeline<P, S> {
    pub fn new(parser: P, sanitizer: S) -> Self {
        Self { parser, sanitizer }
    }

    /// Turn raw node text into display-ready markup.
    ///
    /// Whitespace-only source renders to an empty string.
    pub fn render_source(&self, source: &str) -> Result<String, RenderError> {
        let source = source.trim();
        if source.is_empty() {
            return Ok(String::new());
        }

        let html = self.parser.parse(source)?;
        self.sanitizer.sanitize(&html)
    }
}

impl Default for MarkdownPipeline<ComrakParser, AmmoniaSanitizer> {
    fn default() -> Self {
        Self::new(ComrakParser::new(), AmmoniaSanitizer::new())
    }
}
