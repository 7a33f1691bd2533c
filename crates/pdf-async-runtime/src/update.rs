use pdf_organize::{PageCollection, PageId, PageRef, RenderedPage};
use std::path::PathBuf;

/// Where newly loaded pages go in the organizer
///
/// Inserts are anchored on a page rather than an index, since the grid may
/// be edited while the load is still rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Replace everything
    Replace,
    Append,
    Before(PageId),
    After(PageId),
}

impl Placement {
    /// Index in `collection` where the new pages start. An anchor that is no
    /// longer in the collection resolves to the end.
    pub fn insertion_index(self, collection: &PageCollection) -> usize {
        let anchored = match self {
            Placement::Replace => return 0,
            Placement::Append => None,
            Placement::Before(id) => collection.position(id),
            Placement::After(id) => collection.position(id).map(|index| index + 1),
        };
        anchored.unwrap_or(collection.len())
    }
}

#[derive(Debug, Clone)]
pub struct LoadedPage {
    pub page: PageRef,
    /// `None` when no renderer is available or this page failed to render
    pub thumbnail: Option<RenderedPage>,
}

/// Updates sent from a job to the front end
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Percent complete, `0..=100`
    Progress(u8),
    Status(String),
    /// The job finished; always the last event of a successful job
    Done(String),
    /// The job failed; always the last event of a failed job
    Error(String),
    PagesLoaded {
        placement: Placement,
        source: PathBuf,
        pages: Vec<LoadedPage>,
    },
    PageRendered {
        page: PageRef,
        image: RenderedPage,
    },
}

impl ProgressEvent {
    /// Whether this event ends a job
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProgressEvent::Done(_) | ProgressEvent::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn collection(pages: usize) -> (PageCollection, Vec<PageId>) {
        let mut collection = PageCollection::new();
        let ids = collection.load(PageRef::all_pages(Path::new("a.pdf"), pages));
        (collection, ids)
    }

    #[test]
    fn test_anchor_follows_moved_page() {
        let (mut collection, ids) = collection(4);
        assert_eq!(Placement::Before(ids[2]).insertion_index(&collection), 2);

        collection.move_to(ids[2], 0);
        assert_eq!(Placement::Before(ids[2]).insertion_index(&collection), 0);
        assert_eq!(Placement::After(ids[2]).insertion_index(&collection), 1);
    }

    #[test]
    fn test_anchor_after_earlier_removal() {
        let (mut collection, ids) = collection(4);
        collection.remove(ids[0]);
        assert_eq!(Placement::After(ids[3]).insertion_index(&collection), 3);
    }

    #[test]
    fn test_removed_anchor_resolves_to_end() {
        let (mut collection, ids) = collection(3);
        collection.remove(ids[1]);
        assert_eq!(Placement::Before(ids[1]).insertion_index(&collection), 2);
        assert_eq!(Placement::Append.insertion_index(&collection), 2);
    }
}
