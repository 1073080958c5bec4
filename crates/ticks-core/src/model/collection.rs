//! Ordered, titled list of shared todo items.
//!
//! Items are held as `Rc<Item>`. Derived collections ([`ItemCollection::filter`],
//! [`ItemCollection::all_done`], [`ItemCollection::all_not_done`]) and
//! [`ItemCollection::to_vec`] clone the `Rc`, never the item, so marking an
//! item through any of them is visible everywhere it is held.

use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use super::item::Item;
use super::record::ListRecord;
use crate::error::CollectionError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCollection {
    title: String,
    items: Vec<Rc<Item>>,
}

impl ItemCollection {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Append an item. Accepts an owned [`Item`] or an existing shared handle.
    pub fn add(&mut self, item: impl Into<Rc<Item>>) {
        let item = item.into();
        debug!(list = %self.title, item = item.title(), "adding item");
        self.items.push(item);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Rc<Item>> {
        self.items.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Rc<Item>> {
        self.items.last()
    }

    fn validate_index(&self, idx: usize) -> Result<(), CollectionError> {
        if idx < self.items.len() {
            Ok(())
        } else {
            Err(CollectionError::invalid_index(idx, self.items.len()))
        }
    }

    /// Turn a textual index into a position in this list.
    ///
    /// The text must be ASCII digits only, naming a position in `0..len`.
    /// Leading zeros are allowed. Signs (`+1`, `-0`), surrounding whitespace,
    /// decimal points (`1.0`), and anything non-numeric fail exactly like an
    /// out-of-range index.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidIndex`] carrying `raw` unchanged.
    pub fn resolve_index(&self, raw: &str) -> Result<usize, CollectionError> {
        let invalid = || CollectionError::InvalidIndex {
            index: raw.to_string(),
            len: self.items.len(),
        };
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let idx = raw.parse::<usize>().map_err(|_| invalid())?;
        self.validate_index(idx).map_err(|_| invalid())?;
        Ok(idx)
    }

    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidIndex`] unless `idx < len()`.
    pub fn item_at(&self, idx: usize) -> Result<&Rc<Item>, CollectionError> {
        self.validate_index(idx)?;
        trace!(list = %self.title, idx, "item lookup");
        Ok(&self.items[idx])
    }

    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidIndex`] unless `idx < len()`; nothing
    /// is marked in that case.
    pub fn mark_done_at(&self, idx: usize) -> Result<(), CollectionError> {
        let item = self.item_at(idx)?;
        debug!(list = %self.title, idx, "marking item done");
        item.mark_done();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidIndex`] unless `idx < len()`; nothing
    /// is marked in that case.
    pub fn mark_undone_at(&self, idx: usize) -> Result<(), CollectionError> {
        let item = self.item_at(idx)?;
        debug!(list = %self.title, idx, "marking item undone");
        item.mark_undone();
        Ok(())
    }

    /// Remove and return the item at `idx`; later items move down one place.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidIndex`] unless `idx < len()`; the list
    /// is left untouched in that case.
    pub fn remove_at(&mut self, idx: usize) -> Result<Rc<Item>, CollectionError> {
        self.validate_index(idx)?;
        let removed = self.items.remove(idx);
        debug!(list = %self.title, idx, item = removed.title(), "removed item");
        Ok(removed)
    }

    /// Remove and return the first item, if any.
    pub fn shift(&mut self) -> Option<Rc<Item>> {
        if self.items.is_empty() {
            return None;
        }
        let removed = self.items.remove(0);
        debug!(list = %self.title, item = removed.title(), "shifted item");
        Some(removed)
    }

    /// Remove and return the last item, if any.
    pub fn pop(&mut self) -> Option<Rc<Item>> {
        let removed = self.items.pop();
        if let Some(item) = &removed {
            debug!(list = %self.title, item = item.title(), "popped item");
        }
        removed
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rc<Item>> {
        self.items.iter()
    }

    pub fn for_each(&self, mut f: impl FnMut(&Item)) {
        for item in &self.items {
            f(item);
        }
    }

    /// Items matching `predicate`, in order, under this list's title.
    #[must_use]
    pub fn filter(&self, predicate: impl FnMut(&Item) -> bool) -> Self {
        self.filter_titled(predicate, self.title.clone())
    }

    /// Items matching `predicate`, in order, under a new title.
    #[must_use]
    pub fn filter_titled(
        &self,
        mut predicate: impl FnMut(&Item) -> bool,
        title: impl Into<String>,
    ) -> Self {
        let mut filtered = Self::new(title);
        for item in &self.items {
            if predicate(item) {
                filtered.items.push(Rc::clone(item));
            }
        }
        filtered
    }

    /// First item whose title equals `title` exactly.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&Rc<Item>> {
        self.items.iter().find(|item| item.title() == title)
    }

    #[must_use]
    pub fn all_done(&self) -> Self {
        self.filter(Item::is_done)
    }

    #[must_use]
    pub fn all_not_done(&self) -> Self {
        self.filter(|item| !item.is_done())
    }

    /// Mark the first item titled `title` as done.
    ///
    /// Returns `false`, and changes nothing, when no item has that title.
    pub fn mark_done(&self, title: &str) -> bool {
        let Some(item) = self.find_by_title(title) else {
            debug!(list = %self.title, title, "no item to mark done");
            return false;
        };
        item.mark_done();
        true
    }

    pub fn mark_all_done(&self) {
        debug!(list = %self.title, count = self.items.len(), "marking all items done");
        self.for_each(Item::mark_done);
    }

    pub fn mark_all_undone(&self) {
        debug!(list = %self.title, count = self.items.len(), "marking all items undone");
        self.for_each(Item::mark_undone);
    }

    /// A new `Vec` holding the same items. Pushing to or removing from it does
    /// not affect this list; marking an item through it does.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Rc<Item>> {
        self.items.clone()
    }

    /// Multi-line form: a `---- title ----` header, then one line per item.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn to_record(&self) -> ListRecord {
        ListRecord {
            title: self.title.clone(),
            items: self.items.iter().map(|item| item.to_record()).collect(),
        }
    }

    #[must_use]
    pub fn from_record(record: ListRecord) -> Self {
        Self {
            title: record.title,
            items: record
                .items
                .into_iter()
                .map(|item| Rc::new(Item::from_record(item)))
                .collect(),
        }
    }

    /// Parse a JSON list document into a live collection.
    ///
    /// # Errors
    ///
    /// See [`ListRecord::from_json`].
    pub fn from_json(input: &str) -> Result<Self, CollectionError> {
        ListRecord::from_json(input).map(Self::from_record)
    }
}

impl fmt::Display for ItemCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- {} ----", self.title)?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ItemCollection {
    type Item = &'a Rc<Item>;
    type IntoIter = std::slice::Iter<'a, Rc<Item>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
