//! YAML front-matter assembly and splitting for exported markdown documents.
//!
//! The emitted block is a fixed, line-oriented subset of YAML:
//!
//! ```text
//! ---
//! title: <title>
//! link: <link>            (omitted when blank)
//! cited: <citation>       (omitted when blank)
//! author: <author>
//! tags: [a, b]            (omitted when empty)
//! date: <yyyy-mm-dd>
//!
//! ---
//!
//! <body>
//! ```
//!
//! Splitting only separates the block from the body. Field values are not
//! read back; see [`Entry::from_document`](crate::Entry::from_document).

use chrono::NaiveDate;

const DELIMITER: &str = "---";

/// Metadata written at the top of an exported document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub link: String,
    pub citation: String,
    pub author: String,
    pub tags: Vec<String>,
    pub date: NaiveDate,
}

/// A document split into its front-matter block and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed<'a> {
    /// Raw text between the two delimiter lines, if the document has a block.
    pub front_matter: Option<&'a str>,
    /// Everything after the closing delimiter and its blank separator line,
    /// without the final newline. Leading indentation is kept.
    pub body: &'a str,
}

/// Splits a comma-separated tag list, trimming items and dropping empty ones.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Renders `fm` and `body` into a complete markdown document.
///
/// Field values are written as given; callers keep them on one line
/// (see [`Entry::compose`](crate::Entry::compose)).
pub fn assemble(fm: &FrontMatter, body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 128);
    out.push_str(DELIMITER);
    out.push('\n');
    out.push_str(&format!("title: {}\n", fm.title));
    if !fm.link.trim().is_empty() {
        out.push_str(&format!("link: {}\n", fm.link));
    }
    if !fm.citation.trim().is_empty() {
        out.push_str(&format!("cited: {}\n", fm.citation));
    }
    out.push_str(&format!("author: {}\n", fm.author));
    if !fm.tags.is_empty() {
        out.push_str(&format!("tags: [{}]\n", fm.tags.join(", ")));
    }
    out.push_str(&format!("date: {}\n\n", fm.date.format("%Y-%m-%d")));
    out.push_str(DELIMITER);
    out.push_str("\n\n");
    out.push_str(body);
    out.push('\n');
    out
}

/// Separates the front-matter block from the body.
///
/// A block is recognised only when the document opens with a `---` line and
/// a second `---` line follows. Anything else is treated as body-only
/// content. Delimiter lines inside the body are left untouched.
///
/// Only the layout written by [`assemble`] is removed: one blank line after
/// the closing delimiter and one trailing newline. Splitting an assembled
/// document therefore returns the body exactly as it was passed in.
pub fn split(content: &str) -> Parsed<'_> {
    let whole = Parsed { front_matter: None, body: strip_newline_suffix(content) };

    let Some(after_open) = strip_delimiter_line(content.trim_start()) else {
        return whole;
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let block = &after_open[..offset];
            let rest = &after_open[offset + line.len()..];
            let body = strip_newline_prefix(rest).unwrap_or(rest);
            return Parsed { front_matter: Some(block), body: strip_newline_suffix(body) };
        }
        offset += line.len();
    }
    whole
}

fn strip_delimiter_line(text: &str) -> Option<&str> {
    strip_newline_prefix(text.strip_prefix(DELIMITER)?)
}

fn strip_newline_prefix(text: &str) -> Option<&str> {
    text.strip_prefix("\r\n").or_else(|| text.strip_prefix('\n'))
}

fn strip_newline_suffix(text: &str) -> &str {
    text.strip_suffix("\r\n").or_else(|| text.strip_suffix('\n')).unwrap_or(text)
}
