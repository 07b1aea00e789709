//! High-level note operations over the archive and draft lists.

use crate::core::share::ShareFile;
use crate::{
    Document, Draft, Entry, History, HistoryStore, HydError, Preview, Result, Settings, Swipe,
    SwipeAction,
};
use chrono::{DateTime, Utc};
use log::{debug, info};
use uuid::Uuid;

/// Which list a row-level action applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Archive,
    Drafts,
}

/// Result of [`Journal::perform`].
#[derive(Debug)]
pub enum ActionOutcome {
    /// The row was removed; carries its display name.
    Deleted(String),
    /// The row was loaded back into an editable entry.
    Restored(Entry),
    /// The row was written to a transient file.
    Exported(ShareFile),
    Previewed(Preview),
}

/// The archive of saved/exported documents and the list of drafts, together
/// with the settings used to compose new documents.
///
/// Every mutating method updates a copy of the affected list, saves it
/// through its store, and only then replaces the in-memory list. A failed
/// save leaves the journal as it was.
pub struct Journal {
    exports_store: Box<dyn HistoryStore<Document>>,
    drafts_store: Box<dyn HistoryStore<Draft>>,
    exports: History<Document>,
    drafts: History<Draft>,
    settings: Settings,
}

impl Journal {
    /// Loads both lists from their stores.
    ///
    /// # Errors
    ///
    /// Returns [`HydError::Io`] or [`HydError::Json`] if a stored list exists
    /// but cannot be read.
    pub fn open(
        exports_store: Box<dyn HistoryStore<Document>>,
        drafts_store: Box<dyn HistoryStore<Draft>>,
        settings: Settings,
    ) -> Result<Self> {
        let exports = History::new(exports_store.load()?);
        let drafts = History::new(drafts_store.load()?);
        debug!("opened journal: {} archived, {} drafts", exports.len(), drafts.len());
        Ok(Self { exports_store, drafts_store, exports, drafts, settings })
    }

    pub fn exports(&self) -> &History<Document> {
        &self.exports
    }

    pub fn drafts(&self) -> &History<Draft> {
        &self.drafts
    }

    /// Saves `entry` to the archive.
    ///
    /// The filename follows [`derive_filename`](crate::derive_filename). An
    /// archived document with the same filename is replaced in place, keeping
    /// its id; otherwise the document is added at the front.
    pub fn save_entry(&mut self, entry: &Entry, now: DateTime<Utc>) -> Result<&Document> {
        entry.validate()?;
        let composed = entry.compose(&self.settings, now.date_naive());
        let mut next = self.exports.clone();
        let idx = next.upsert_by_filename(Document::new(composed.filename, now, composed.markdown));
        self.commit_exports(next)?;
        let doc = self.exports.get(idx)?;
        info!("saved {}", doc.filename);
        Ok(doc)
    }

    /// Writes `entry` to a transient file and records it in the archive.
    ///
    /// Nothing is recorded if the file cannot be written.
    pub fn export_entry(&mut self, entry: &Entry, now: DateTime<Utc>) -> Result<ShareFile> {
        entry.validate()?;
        let composed = entry.compose(&self.settings, now.date_naive());
        let share = ShareFile::write(&composed.filename, &composed.markdown)?;
        let mut next = self.exports.clone();
        next.add(Document::new(composed.filename, now, composed.markdown));
        self.commit_exports(next)?;
        Ok(share)
    }

    /// Adds `entry` as a draft, or updates the draft it was restored from.
    pub fn save_draft(&mut self, entry: &Entry, now: DateTime<Utc>) -> Result<&Draft> {
        if entry.title.trim().is_empty() && entry.body.trim().is_empty() {
            return Err(HydError::ValidationFailed("Nothing to save".to_string()));
        }
        let draft = Draft {
            id: entry.draft_id.unwrap_or_else(Uuid::new_v4),
            title: entry.title.clone(),
            body: entry.body.clone(),
            link: entry.link.clone(),
            citation: entry.citation.clone(),
            date: now,
        };
        let id = draft.id;
        let mut next = self.drafts.clone();
        next.add_or_update(draft);
        self.commit_drafts(next)?;
        let idx = self.drafts.position_of(id).ok_or_else(|| HydError::NotFound(id.to_string()))?;
        self.drafts.get(idx)
    }

    /// Writes an archived document, unchanged, to a transient file.
    pub fn export_document(&self, index: usize) -> Result<ShareFile> {
        let doc = self.exports.get(index)?;
        ShareFile::write(&doc.filename, &doc.content)
    }

    /// Composes a draft with the current defaults and writes it to a
    /// transient file. The draft's own date is used for the filename.
    pub fn export_draft(&self, index: usize) -> Result<ShareFile> {
        let draft = self.drafts.get(index)?;
        let composed = Entry::from_draft(draft).compose(&self.settings, draft.date.date_naive());
        ShareFile::write(&composed.filename, &composed.markdown)
    }

    pub fn restore_document(&self, index: usize) -> Result<Entry> {
        Ok(Entry::from_document(self.exports.get(index)?))
    }

    pub fn restore_draft(&self, index: usize) -> Result<Entry> {
        Ok(Entry::from_draft(self.drafts.get(index)?))
    }

    pub fn delete_document(&mut self, index: usize) -> Result<Document> {
        let mut next = self.exports.clone();
        let removed = next.delete(index)?;
        self.commit_exports(next)?;
        info!("deleted {}", removed.filename);
        Ok(removed)
    }

    pub fn delete_draft(&mut self, index: usize) -> Result<Draft> {
        let mut next = self.drafts.clone();
        let removed = next.delete(index)?;
        self.commit_drafts(next)?;
        info!("deleted draft {}", removed.display_title());
        Ok(removed)
    }

    pub fn preview_document(&self, index: usize) -> Result<Preview> {
        Ok(Preview::new(self.exports.get(index)?.content.clone()))
    }

    pub fn preview_draft(&self, index: usize) -> Result<Preview> {
        let draft = self.drafts.get(index)?;
        let composed = Entry::from_draft(draft).compose(&self.settings, draft.date.date_naive());
        Ok(Preview::new(composed.markdown))
    }

    /// Runs the action bound to `swipe` on row `index` of `list`.
    pub fn perform(&mut self, list: ListKind, swipe: Swipe, index: usize) -> Result<ActionOutcome> {
        let action = self.settings.swipe.action(swipe);
        debug!("{swipe:?} on {list:?}[{index}] -> {action}");
        self.apply(list, action, index)
    }

    /// Runs `action` on row `index` of `list`.
    pub fn apply(&mut self, list: ListKind, action: SwipeAction, index: usize) -> Result<ActionOutcome> {
        let outcome = match (list, action) {
            (ListKind::Archive, SwipeAction::Delete) => {
                ActionOutcome::Deleted(self.delete_document(index)?.filename)
            }
            (ListKind::Drafts, SwipeAction::Delete) => {
                ActionOutcome::Deleted(self.delete_draft(index)?.display_title().to_string())
            }
            (ListKind::Archive, SwipeAction::Restore) => {
                ActionOutcome::Restored(self.restore_document(index)?)
            }
            (ListKind::Drafts, SwipeAction::Restore) => {
                ActionOutcome::Restored(self.restore_draft(index)?)
            }
            (ListKind::Archive, SwipeAction::Export) => {
                ActionOutcome::Exported(self.export_document(index)?)
            }
            (ListKind::Drafts, SwipeAction::Export) => {
                ActionOutcome::Exported(self.export_draft(index)?)
            }
            (ListKind::Archive, SwipeAction::Preview) => {
                ActionOutcome::Previewed(self.preview_document(index)?)
            }
            (ListKind::Drafts, SwipeAction::Preview) => {
                ActionOutcome::Previewed(self.preview_draft(index)?)
            }
        };
        Ok(outcome)
    }

    fn commit_exports(&mut self, next: History<Document>) -> Result<()> {
        self.exports_store.save(next.items())?;
        self.exports = next;
        Ok(())
    }

    fn commit_drafts(&mut self, next: History<Draft>) -> Result<()> {
        self.drafts_store.save(next.items())?;
        self.drafts = next;
        Ok(())
    }
}
