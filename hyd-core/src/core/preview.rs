//! Read-only previews of archived documents and drafts.

use crate::core::front_matter;
use pulldown_cmark::{html as md_html, Options, Parser};

/// A document as shown in the preview pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// The full markdown text, front matter included.
    pub markdown: String,
    /// The body rendered to HTML.
    pub html: String,
}

impl Preview {
    pub fn new(markdown: String) -> Self {
        let html = render_markdown_to_html(front_matter::split(&markdown).body);
        Self { markdown, html }
    }
}

/// Converts markdown text to an HTML fragment.
pub fn render_markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(text, options);
    let mut html_output = String::new();
    md_html::push_html(&mut html_output, parser);
    html_output
}
