use std::cell::Cell;
use std::fmt;

use super::record::ItemRecord;

/// Marker rendered between the brackets of a finished item.
pub const DONE_MARKER: &str = "X";
/// Marker rendered between the brackets of an unfinished item.
pub const UNDONE_MARKER: &str = " ";

/// A single todo entry.
///
/// The title is fixed at construction. The done flag lives in a [`Cell`] so
/// every collection holding the same `Rc<Item>` sees a change made through
/// any of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    title: String,
    done: Cell<bool>,
}

impl Item {
    /// Create an unfinished item. Any title is accepted, including `""`.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: Cell::new(false),
        }
    }

    pub fn mark_done(&self) {
        self.done.set(true);
    }

    pub fn mark_undone(&self) {
        self.done.set(false);
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done.get()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The glyph shown between the brackets: [`DONE_MARKER`] or [`UNDONE_MARKER`].
    #[must_use]
    pub fn marker(&self) -> &'static str {
        if self.is_done() {
            DONE_MARKER
        } else {
            UNDONE_MARKER
        }
    }

    /// Single-line form: `[X] title` or `[ ] title`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn to_record(&self) -> ItemRecord {
        ItemRecord {
            title: self.title.clone(),
            done: self.is_done(),
        }
    }

    #[must_use]
    pub fn from_record(record: ItemRecord) -> Self {
        Self {
            title: record.title,
            done: Cell::new(record.done),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.marker(), self.title)
    }
}
