//! The editable note form and its composition into a markdown document.

use crate::core::front_matter::{self, FrontMatter};
use crate::core::slug;
use crate::{Document, Draft, HydError, Result, Settings};
use chrono::NaiveDate;
use uuid::Uuid;

/// Fields of the note being written.
///
/// `author` and `tags` override the configured defaults when non-blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub body: String,
    pub link: String,
    pub citation: String,
    pub author: String,
    /// Comma-separated.
    pub tags: String,
    /// Set when the entry was restored from a draft, so saving it again
    /// updates that draft instead of creating a new one.
    pub draft_id: Option<Uuid>,
}

/// An entry rendered to its filename and markdown text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composed {
    pub filename: String,
    pub front_matter: FrontMatter,
    pub markdown: String,
}

impl Entry {
    /// Fails with a user-facing message unless both title and body are non-blank.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(HydError::ValidationFailed("Title is required".to_string()));
        }
        if self.body.trim().is_empty() {
            return Err(HydError::ValidationFailed("Body is required".to_string()));
        }
        Ok(())
    }

    /// The author written to the document.
    fn resolved_author(&self, settings: &Settings) -> String {
        if self.author.trim().is_empty() {
            single_line(&settings.default_author)
        } else {
            single_line(&self.author)
        }
    }

    /// The tag list written to the document.
    fn resolved_tags(&self, settings: &Settings) -> Vec<String> {
        let raw = if self.tags.trim().is_empty() { &settings.default_tags } else { &self.tags };
        front_matter::parse_tags(&single_line(raw))
    }

    /// Renders the entry for `date`.
    ///
    /// A title that already carries a `yyyy-mm-dd-` prefix keeps that date in
    /// both the filename and the front matter. Line breaks in the one-line
    /// fields become single spaces so they cannot end the front-matter block.
    /// Trailing whitespace is dropped from the body.
    pub fn compose(&self, settings: &Settings, date: NaiveDate) -> Composed {
        let title = single_line(&self.title);
        let filename = slug::derive_filename(&title, date);
        let date = slug::prefixed_date(&title).unwrap_or(date);
        let fm = FrontMatter {
            link: single_line(&self.link),
            citation: single_line(&self.citation),
            author: self.resolved_author(settings),
            tags: self.resolved_tags(settings),
            title,
            date,
        };
        let markdown = front_matter::assemble(&fm, self.body.trim_end());
        Composed { filename, front_matter: fm, markdown }
    }

    /// Restores an archived document into the form.
    ///
    /// Only the body (from the content) and the title (from the filename)
    /// come back. Link, citation, author and tags stay blank: the archive
    /// keeps them only inside the rendered front matter, which is not read
    /// back into fields.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            title: slug::title_from_filename(&doc.filename),
            body: front_matter::split(&doc.content).body.to_string(),
            ..Self::default()
        }
    }

    pub fn from_draft(draft: &Draft) -> Self {
        Self {
            title: draft.title.clone(),
            body: draft.body.clone(),
            link: draft.link.clone(),
            citation: draft.citation.clone(),
            draft_id: Some(draft.id),
            ..Self::default()
        }
    }
}

/// Joins the lines of `text` with single spaces, trimming each line.
fn single_line(text: &str) -> String {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).collect::<Vec<_>>().join(" ")
}
