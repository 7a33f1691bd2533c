use pdf_organize::*;
use std::path::Path;

fn pages(source: &str, count: usize) -> Vec<PageRef> {
    PageRef::all_pages(Path::new(source), count)
}

fn order(collection: &PageCollection) -> Vec<(String, usize)> {
    collection
        .iter()
        .map(|e| {
            (
                e.page.source().display().to_string(),
                e.page.original_index,
            )
        })
        .collect()
}

#[test]
fn test_load_replaces_contents() {
    let mut collection = PageCollection::new();
    collection.load(pages("a.pdf", 3));
    collection.load(pages("b.pdf", 2));

    assert_eq!(
        order(&collection),
        vec![("b.pdf".to_string(), 0), ("b.pdf".to_string(), 1)]
    );
}

#[test]
fn test_insert_past_end_appends() {
    let mut collection = PageCollection::new();
    collection.load(pages("a.pdf", 2));
    collection.insert_at(99, pages("b.pdf", 1));

    assert_eq!(collection.len(), 3);
    assert_eq!(order(&collection)[2], ("b.pdf".to_string(), 0));
}

#[test]
fn test_insert_in_middle_keeps_neighbours() {
    let mut collection = PageCollection::new();
    collection.load(pages("a.pdf", 3));
    collection.insert_at(1, pages("b.pdf", 2));

    assert_eq!(
        order(&collection),
        vec![
            ("a.pdf".to_string(), 0),
            ("b.pdf".to_string(), 0),
            ("b.pdf".to_string(), 1),
            ("a.pdf".to_string(), 1),
            ("a.pdf".to_string(), 2),
        ]
    );
}

#[test]
fn test_length_follows_inserts_and_removes() {
    let mut collection = PageCollection::new();
    let ids = collection.load(pages("a.pdf", 4));
    collection.append(pages("b.pdf", 3));
    collection.insert_at(2, pages("c.pdf", 1));
    collection.remove(ids[0]);
    collection.remove(ids[3]);
    collection.move_to(ids[1], 4);

    assert_eq!(collection.len(), 4 + 3 + 1 - 2);
}

#[test]
fn test_move_keeps_relative_order_of_others() {
    let mut collection = PageCollection::new();
    let ids = collection.load(pages("a.pdf", 6));

    assert!(collection.move_to(ids[1], 4));

    let indices: Vec<usize> = collection.iter().map(|e| e.page.original_index).collect();
    assert_eq!(indices, vec![0, 2, 3, 4, 1, 5]);

    assert!(collection.move_to(ids[5], 0));
    let indices: Vec<usize> = collection.iter().map(|e| e.page.original_index).collect();
    assert_eq!(indices, vec![5, 0, 2, 3, 4, 1]);
}

#[test]
fn test_move_to_current_index_is_noop() {
    let mut collection = PageCollection::new();
    let ids = collection.load(pages("a.pdf", 3));
    let before = collection.ids();

    assert!(!collection.move_to(ids[1], 1));
    assert_eq!(collection.ids(), before);
}

#[test]
fn test_move_past_end_lands_last() {
    let mut collection = PageCollection::new();
    let ids = collection.load(pages("a.pdf", 3));

    assert!(collection.move_to(ids[0], 100));
    assert_eq!(collection.position(ids[0]), Some(2));
}

#[test]
fn test_remove_unknown_is_noop() {
    let mut collection = PageCollection::new();
    let ids = collection.load(pages("a.pdf", 2));
    let removed = collection.remove(ids[0]);
    assert_eq!(removed, Some(PageRef::new("a.pdf", 0)));

    assert_eq!(collection.remove(ids[0]), None);
    assert_eq!(collection.len(), 1);
}

#[test]
fn test_rotation_accumulates_mod_360() {
    let mut collection = PageCollection::new();
    let ids = collection.load(pages("a.pdf", 1));

    for _ in 0..4 {
        collection.rotate(ids[0], 90);
    }
    assert_eq!(collection.get(ids[0]).unwrap().rotation, 0);

    collection.rotate(ids[0], -90);
    assert_eq!(collection.get(ids[0]).unwrap().rotation, 270);
}

#[test]
fn test_duplicate_pages_are_independent() {
    let mut collection = PageCollection::new();
    let first = collection.load(vec![PageRef::new("a.pdf", 0)]);
    let second = collection.append(vec![PageRef::new("a.pdf", 0)]);
    assert_ne!(first[0], second[0]);

    collection.rotate(second[0], 180);
    assert_eq!(collection.get(first[0]).unwrap().rotation, 0);
    assert_eq!(collection.get(second[0]).unwrap().rotation, 180);

    collection.remove(first[0]);
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.entry_at(0).unwrap().id, second[0]);
}

#[test]
fn test_snapshot_is_detached() {
    let mut collection = PageCollection::new();
    let ids = collection.load(pages("a.pdf", 2));
    let snapshot = collection.snapshot();

    collection.rotate(ids[0], 90);
    collection.clear();

    assert!(collection.is_empty());
    assert_eq!(snapshot, pages("a.pdf", 2));
}
