//! Inheritable page attributes
//!
//! `Resources`, `MediaBox`, `CropBox` and `Rotate` may live on any ancestor
//! in the page tree. A page copied out of its tree has to carry them itself.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use lopdf::{Document, Object, ObjectId};

pub(crate) const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Parent chains longer than this are treated as broken
const MAX_TREE_DEPTH: usize = 64;

/// Look up `key` on a page or the nearest ancestor that defines it.
///
/// References are resolved, so the returned object is a direct value.
pub fn page_attribute(doc: &Document, page_id: ObjectId, key: &[u8]) -> Option<Object> {
    let mut node_id = page_id;
    for _ in 0..MAX_TREE_DEPTH {
        let node = doc.get_dictionary(node_id).ok()?;
        if let Ok(value) = node.get(key) {
            return Some(resolve(doc, value).clone());
        }
        node_id = node.get(b"Parent").and_then(Object::as_reference).ok()?;
    }
    None
}

/// Page width and height in points, taken from the (inherited) MediaBox
pub fn page_size(doc: &Document, page_id: ObjectId) -> (f32, f32) {
    page_attribute(doc, page_id, b"MediaBox")
        .and_then(|media_box| box_dimensions(doc, &media_box))
        .unwrap_or(DEFAULT_PAGE_DIMENSIONS)
}

/// Rotation stored on the page (or inherited), normalized to `0..360`
pub(crate) fn page_rotation(doc: &Document, page_id: ObjectId) -> i32 {
    page_attribute(doc, page_id, b"Rotate")
        .and_then(|rotate| rotate.as_i64().ok())
        .map(|degrees| (degrees as i32).rem_euclid(360))
        .unwrap_or(0)
}

fn box_dimensions(doc: &Document, media_box: &Object) -> Option<(f32, f32)> {
    let values = media_box.as_array().ok()?;
    if values.len() != 4 {
        return None;
    }
    let mut coords = [0.0f32; 4];
    for (slot, value) in coords.iter_mut().zip(values) {
        *slot = resolve(doc, value).as_float().ok()?;
    }
    let width = (coords[2] - coords[0]).abs();
    let height = (coords[3] - coords[1]).abs();
    (width > 0.0 && height > 0.0).then_some((width, height))
}

pub(crate) fn resolve<'a>(doc: &'a Document, object: &'a Object) -> &'a Object {
    match object {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(object),
        _ => object,
    }
}
