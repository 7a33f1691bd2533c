//! Page assembly
//!
//! Builds a fresh document from an ordered list of [`PageRef`]s drawn from
//! any number of loaded sources:
//! 1. Renumber each source past the objects already in the output
//! 2. Move its objects across
//! 3. Copy every referenced page into a new page dictionary carrying its
//!    inherited attributes and the requested extra rotation
//! 4. Hang the copies off a new page tree and drop what nothing references

mod attributes;

pub use attributes::{page_attribute, page_size};

use crate::collection::PageRef;
use crate::types::*;
use attributes::{INHERITABLE_KEYS, page_rotation};
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Assemble `pages` (in order) out of `sources` into a new document.
///
/// Pages whose index is past the end of their source are skipped with a
/// warning, matching how a stale organizer entry is treated on save.
pub fn assemble(sources: &HashMap<PathBuf, Document>, pages: &[PageRef]) -> Result<Document> {
    let mut output = Document::with_version("1.7");
    let pages_id = output.new_object_id();

    let page_ids = import_sources(&mut output, sources, pages)?;

    let mut kids = Vec::with_capacity(pages.len());
    for page in pages {
        let Some(&source_page_id) = page_ids
            .get(page.source())
            .and_then(|ids| ids.get(page.original_index))
        else {
            log::warn!(
                "Skipping page {} of {}: not in source",
                page.original_index + 1,
                page.source().display()
            );
            continue;
        };
        let copy = copy_page(&output, source_page_id, pages_id, page.rotation)?;
        kids.push(Object::Reference(output.add_object(copy)));
    }

    if kids.is_empty() {
        return Err(OrganizeError::NoPages);
    }

    finish_page_tree(&mut output, pages_id, kids);
    output.prune_objects();
    Ok(output)
}

/// Renumber and move every source `pages` refers to into `output`; returns
/// each source's page ids in page order, as they are numbered in `output`.
fn import_sources(
    output: &mut Document,
    sources: &HashMap<PathBuf, Document>,
    pages: &[PageRef],
) -> Result<HashMap<PathBuf, Vec<ObjectId>>> {
    let mut page_ids: HashMap<PathBuf, Vec<ObjectId>> = HashMap::new();

    for page in pages {
        let path = page.source();
        if page_ids.contains_key(path) {
            continue;
        }
        let source = sources.get(path).ok_or_else(|| {
            OrganizeError::Config(format!("Source not loaded: {}", path.display()))
        })?;

        let mut source = source.clone();
        source.renumber_objects_with(output.max_id + 1);
        let ids: Vec<ObjectId> = source.get_pages().values().copied().collect();

        output.max_id = output.max_id.max(source.max_id);
        output.objects.extend(source.objects);
        page_ids.insert(path.to_owned(), ids);
    }

    Ok(page_ids)
}

/// A standalone copy of a page dictionary, re-parented under `parent_id`.
fn copy_page(
    doc: &Document,
    page_id: ObjectId,
    parent_id: ObjectId,
    extra_rotation: i32,
) -> Result<Dictionary> {
    let mut page = doc.get_dictionary(page_id)?.clone();

    for key in INHERITABLE_KEYS {
        if !page.has(key) {
            if let Some(value) = page_attribute(doc, page_id, key) {
                page.set(key.to_vec(), value);
            }
        }
    }

    let rotation = (page_rotation(doc, page_id) + extra_rotation).rem_euclid(360);
    if rotation != 0 || page.has(b"Rotate") {
        page.set("Rotate", Object::Integer(rotation as i64));
    }

    page.set("Parent", Object::Reference(parent_id));
    Ok(page)
}

fn finish_page_tree(doc: &mut Document, pages_id: ObjectId, kids: Vec<Object>) {
    let count = kids.len() as i64;
    let mut pages = Dictionary::new();
    pages.set("Type", Object::Name(b"Pages".to_vec()));
    pages.set("Kids", Object::Array(kids));
    pages.set("Count", Object::Integer(count));
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(catalog);

    doc.trailer.set("Root", Object::Reference(catalog_id));
}

/// Every page of one document, in order, as a standalone document
pub fn assemble_all(source_path: &Path, source: Document) -> Result<Document> {
    let page_count = source.get_pages().len();
    let mut sources = HashMap::new();
    sources.insert(source_path.to_owned(), source);
    assemble(&sources, &PageRef::all_pages(source_path, page_count))
}
