//! The organizer's working list of pages
//!
//! Order in the collection is the order pages are written on save. Each
//! entry carries a [`PageId`] that identifies that particular instance, so
//! the same source page may be present more than once and still be moved,
//! rotated or removed independently.

use std::path::{Path, PathBuf};

/// Identity of one entry in a [`PageCollection`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(u64);

/// Where a page comes from and how it is turned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRef {
    pub source: PathBuf,
    /// Zero-based page index within `source`
    pub original_index: usize,
    /// Clockwise degrees in `0..360`, added to the page's own rotation on save
    pub rotation: i32,
}

impl PageRef {
    pub fn new(source: impl Into<PathBuf>, original_index: usize) -> Self {
        Self {
            source: source.into(),
            original_index,
            rotation: 0,
        }
    }

    pub fn with_rotation(mut self, degrees: i32) -> Self {
        self.rotate(degrees);
        self
    }

    pub fn rotate(&mut self, delta_degrees: i32) {
        self.rotation = (self.rotation + delta_degrees).rem_euclid(360);
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Every page of a document, in order
    pub fn all_pages(source: &Path, page_count: usize) -> Vec<PageRef> {
        (0..page_count).map(|i| PageRef::new(source, i)).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionEntry {
    pub id: PageId,
    pub page: PageRef,
}

#[derive(Debug, Default)]
pub struct PageCollection {
    entries: Vec<CollectionEntry>,
    next_id: u64,
}

impl PageCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection
    pub fn load(&mut self, pages: impl IntoIterator<Item = PageRef>) -> Vec<PageId> {
        self.entries.clear();
        self.append(pages)
    }

    pub fn append(&mut self, pages: impl IntoIterator<Item = PageRef>) -> Vec<PageId> {
        let len = self.entries.len();
        self.insert_at(len, pages)
    }

    /// Insert before `index`; an index past the end appends.
    pub fn insert_at(
        &mut self,
        index: usize,
        pages: impl IntoIterator<Item = PageRef>,
    ) -> Vec<PageId> {
        let index = index.min(self.entries.len());
        let new_entries: Vec<CollectionEntry> = pages
            .into_iter()
            .map(|page| CollectionEntry {
                id: self.allocate_id(),
                page,
            })
            .collect();
        let ids = new_entries.iter().map(|e| e.id).collect();
        self.entries.splice(index..index, new_entries);
        ids
    }

    /// Move one entry so it ends up at `new_index`, keeping the relative order
    /// of every other entry. Returns whether the order changed.
    pub fn move_to(&mut self, id: PageId, new_index: usize) -> bool {
        let Some(current) = self.position(id) else {
            return false;
        };
        let new_index = new_index.min(self.entries.len() - 1);
        if new_index == current {
            return false;
        }
        let entry = self.entries.remove(current);
        self.entries.insert(new_index, entry);
        true
    }

    /// Remove one entry; unknown ids are ignored.
    pub fn remove(&mut self, id: PageId) -> Option<PageRef> {
        let index = self.position(id)?;
        Some(self.entries.remove(index).page)
    }

    pub fn rotate(&mut self, id: PageId, delta_degrees: i32) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.page.rotate(delta_degrees);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn position(&self, id: PageId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn get(&self, id: PageId) -> Option<&PageRef> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.page)
    }

    pub fn entry_at(&self, index: usize) -> Option<&CollectionEntry> {
        self.entries.get(index)
    }

    pub fn ids(&self) -> Vec<PageId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollectionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of the current order for a background save
    pub fn snapshot(&self) -> Vec<PageRef> {
        self.entries.iter().map(|e| e.page.clone()).collect()
    }

    fn allocate_id(&mut self) -> PageId {
        let id = PageId(self.next_id);
        self.next_id += 1;
        id
    }
}
