//! Ordered, newest-first history lists and their persistence.
//!
//! [`History`] is a plain in-memory list; it never touches storage on its
//! own. Callers load it through a [`HistoryStore`], mutate it, then hand the
//! whole list back to [`HistoryStore::save`].

use crate::{Document, HistoryItem, HydError, Result};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Storage key for the archive of exported and saved documents.
pub const EXPORTS_KEY: &str = "exportedFiles";
/// Storage key for drafts.
pub const DRAFTS_KEY: &str = "drafts";

/// An ordered list of items, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<T> {
    items: Vec<T>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: HistoryItem> History<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Inserts `item` at index 0.
    pub fn add(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Removes and returns the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HydError::IndexOutOfRange`] if there is no such item; the
    /// list is left unchanged.
    pub fn delete(&mut self, index: usize) -> Result<T> {
        if index >= self.items.len() {
            return Err(HydError::IndexOutOfRange { index, len: self.items.len() });
        }
        Ok(self.items.remove(index))
    }

    /// Replaces the item with the same id in place. Returns `false` if no
    /// item matched.
    pub fn update(&mut self, item: T) -> bool {
        match self.position_of(item.id()) {
            Some(idx) => {
                self.items[idx] = item;
                true
            }
            None => false,
        }
    }

    /// Updates the item with the same id, or adds it at the front.
    pub fn add_or_update(&mut self, item: T) {
        if let Some(idx) = self.position_of(item.id()) {
            self.items[idx] = item;
        } else {
            self.add(item);
        }
    }

    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.items.iter().position(|i| i.id() == id)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.items
            .get(index)
            .ok_or(HydError::IndexOutOfRange { index, len: self.items.len() })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl History<Document> {
    /// Replaces a document with the same filename, keeping its id and
    /// position, or adds `doc` at the front. Returns the resulting index.
    pub fn upsert_by_filename(&mut self, doc: Document) -> usize {
        match self.items.iter().position(|d| d.filename == doc.filename) {
            Some(idx) => {
                let id = self.items[idx].id;
                self.items[idx] = Document { id, ..doc };
                idx
            }
            None => {
                self.add(doc);
                0
            }
        }
    }
}

/// Explicit whole-list persistence for a [`History`].
pub trait HistoryStore<T> {
    /// Returns the stored list, or an empty list if nothing was saved yet.
    fn load(&self) -> Result<Vec<T>>;

    /// Replaces the stored list with `items`.
    fn save(&self, items: &[T]) -> Result<()>;
}

/// Stores each list as a JSON array in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(dir: P, key: &str) -> Self {
        Self { path: dir.as_ref().join(format!("{key}.json")) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: Serialize + DeserializeOwned> HistoryStore<T> for JsonFileStore {
    fn load(&self) -> Result<Vec<T>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no stored list at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        let items: Vec<T> = serde_json::from_slice(&data)?;
        debug!("loaded {} items from {}", items.len(), self.path.display());
        Ok(items)
    }

    fn save(&self, items: &[T]) -> Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;
        let json = serde_json::to_vec_pretty(items)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&json)?;
        tmp.persist(&self.path).map_err(|e| HydError::Io(e.error))?;
        debug!("saved {} items to {}", items.len(), self.path.display());
        Ok(())
    }
}

/// Keeps one serialized list in memory.
///
/// Items pass through JSON so that load/save behave like the file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl<T: Serialize + DeserializeOwned> HistoryStore<T> for MemoryStore {
    fn load(&self) -> Result<Vec<T>> {
        match self.slot.borrow().as_deref() {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, items: &[T]) -> Result<()> {
        *self.slot.borrow_mut() = Some(serde_json::to_string(items)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn doc(name: &str) -> Document {
        Document::new(name.to_string(), Utc::now(), format!("content of {name}"))
    }

    #[test]
    fn test_add_places_at_front() {
        let mut h = History::default();
        h.add(doc("a.md"));
        h.add(doc("b.md"));
        h.add(doc("c.md"));
        let names: Vec<_> = h.iter().map(|d| d.filename.as_str()).collect();
        assert_eq!(names, ["c.md", "b.md", "a.md"]);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut h = History::new(vec![doc("a.md"), doc("b.md"), doc("c.md")]);
        let removed = h.delete(1).unwrap();
        assert_eq!(removed.filename, "b.md");
        assert_eq!(h.len(), 2);
        assert_eq!(h.get(1).unwrap().filename, "c.md");
    }

    #[test]
    fn test_delete_out_of_range_leaves_list() {
        let mut h = History::new(vec![doc("a.md")]);
        let err = h.delete(3).unwrap_err();
        assert!(matches!(err, HydError::IndexOutOfRange { index: 3, len: 1 }));
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn test_update_by_id() {
        let original = doc("a.md");
        let mut h = History::new(vec![doc("z.md"), original.clone()]);
        let changed = Document { content: "new".to_string(), ..original.clone() };
        assert!(h.update(changed));
        assert_eq!(h.get(1).unwrap().content, "new");
        assert!(!h.update(doc("missing.md")));
    }

    #[test]
    fn test_add_or_update() {
        let first = doc("a.md");
        let mut h = History::default();
        h.add_or_update(first.clone());
        h.add(doc("b.md"));
        h.add_or_update(Document { content: "edited".to_string(), ..first.clone() });
        assert_eq!(h.len(), 2);
        assert_eq!(h.get(1).unwrap().content, "edited");
    }

    #[test]
    fn test_upsert_by_filename_keeps_id_and_position() {
        let kept = doc("2025-05-10-post.md");
        let mut h = History::new(vec![doc("newer.md"), kept.clone()]);
        let idx = h.upsert_by_filename(Document {
            content: "second save".to_string(),
            ..doc("2025-05-10-post.md")
        });
        assert_eq!(idx, 1);
        assert_eq!(h.len(), 2);
        assert_eq!(h.get(1).unwrap().id, kept.id);
        assert_eq!(h.get(1).unwrap().content, "second save");

        assert_eq!(h.upsert_by_filename(doc("other.md")), 0);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn test_json_file_store_missing_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path(), EXPORTS_KEY);
        let items: Vec<Document> = store.load().unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_json_file_store_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested"), EXPORTS_KEY);
        let items = vec![doc("b.md"), doc("a.md")];
        store.save(items.as_slice()).unwrap();
        assert!(store.path().ends_with("exportedFiles.json"));
        let loaded: Vec<Document> = store.load().unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_json_file_store_corrupt_is_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path(), DRAFTS_KEY);
        fs::write(store.path(), "not json").unwrap();
        let result: Result<Vec<Document>> = store.load();
        assert!(matches!(result, Err(HydError::Json(_))));
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::default();
        let empty: Vec<Document> = store.load().unwrap();
        assert!(empty.is_empty());
        let items = vec![doc("x.md")];
        store.save(items.as_slice()).unwrap();
        let loaded: Vec<Document> = store.load().unwrap();
        assert_eq!(loaded, items);

        store.save(&[] as &[Document]).unwrap();
        let cleared: Vec<Document> = store.load().unwrap();
        assert!(cleared.is_empty());
    }
}
