//! Internal domain modules for the Hyd core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod document;
pub mod entry;
pub mod error;
pub mod front_matter;
pub mod history;
pub mod journal;
pub mod preview;
pub mod settings;
pub mod share;
pub mod slug;

#[doc(inline)]
pub use document::{Document, Draft, HistoryItem};
#[doc(inline)]
pub use entry::{Composed, Entry};
#[doc(inline)]
pub use error::{HydError, Result};
#[doc(inline)]
pub use front_matter::{FrontMatter, Parsed};
#[doc(inline)]
pub use history::{History, HistoryStore, JsonFileStore, MemoryStore, DRAFTS_KEY, EXPORTS_KEY};
#[doc(inline)]
pub use journal::{ActionOutcome, Journal, ListKind};
#[doc(inline)]
pub use preview::Preview;
#[doc(inline)]
pub use settings::{Settings, Swipe, SwipeAction, SwipeBindings, Theme, SETTING_KEYS};
#[doc(inline)]
pub use share::ShareFile;
#[doc(inline)]
pub use slug::{derive_filename, slugify, title_from_filename};
