//! Core library for Hyd, a small note-authoring tool that turns a title,
//! markdown body and optional metadata into a YAML-front-matter markdown
//! document, and keeps exported documents and drafts in local history lists.
//!
//! The primary entry point is [`Journal`], which owns the archive and draft
//! lists and persists them through a [`HistoryStore`] after every change.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use crate::core::{
    document::{Document, Draft, HistoryItem},
    entry::{Composed, Entry},
    error::{HydError, Result},
    front_matter::{parse_tags, FrontMatter, Parsed},
    history::{History, HistoryStore, JsonFileStore, MemoryStore, DRAFTS_KEY, EXPORTS_KEY},
    journal::{ActionOutcome, Journal, ListKind},
    preview::{render_markdown_to_html, Preview},
    settings::{Settings, Swipe, SwipeAction, SwipeBindings, Theme, SETTING_KEYS},
    share::ShareFile,
    slug::{date_prefix, derive_filename, slugify, title_from_filename},
};
