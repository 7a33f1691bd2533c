//! Merging overlays onto pages

use crate::embed::{EmbeddedImage, WatermarkImage};
use crate::options::{ImageWatermark, PageNumberOptions, TextWatermark, WatermarkSpec};
use crate::overlay::{
    Overlay, ResourceKind, compose_image_overlay, compose_page_number, compose_text_overlay,
};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use pdf_organize::{page_attribute, page_size};
use std::collections::{BTreeSet, HashMap};

/// A watermark ready to stamp: text, or an image already decoded
#[derive(Debug, Clone)]
pub enum Watermark {
    Text(TextWatermark),
    Image {
        image: WatermarkImage,
        options: ImageWatermark,
    },
}

impl Watermark {
    /// Validate `spec` and decode its image, if any.
    pub fn load(spec: &WatermarkSpec) -> Result<Self> {
        spec.validate()?;
        Ok(match spec {
            WatermarkSpec::Text(text) => Watermark::Text(text.clone()),
            WatermarkSpec::Image(options) => Watermark::Image {
                image: WatermarkImage::open(&options.path)?,
                options: options.clone(),
            },
        })
    }
}

/// Draws overlays on pages of one document, adding each shared resource
/// (fonts, transparency states) to the document only once.
pub struct Stamper<'a> {
    doc: &'a mut Document,
    shared: HashMap<(ResourceKind, String), ObjectId>,
}

impl<'a> Stamper<'a> {
    pub fn new(doc: &'a mut Document) -> Self {
        Self {
            doc,
            shared: HashMap::new(),
        }
    }

    pub fn document(&mut self) -> &mut Document {
        self.doc
    }

    /// Draw `overlay` over the existing content of `page_id`.
    ///
    /// The existing content is wrapped in `q`/`Q` so graphics state it leaves
    /// behind cannot move or recolor the overlay.
    pub fn stamp_page(&mut self, page_id: ObjectId, overlay: &Overlay) -> Result<()> {
        let mut resources = match page_attribute(self.doc, page_id, b"Resources") {
            Some(Object::Dictionary(dict)) => dict,
            _ => Dictionary::new(),
        };

        for resource in &overlay.resources {
            let object = match &resource.object {
                Object::Reference(id) => Object::Reference(*id),
                direct => Object::Reference(self.shared_object(resource.kind, &resource.name, direct)),
            };
            self.add_resource(&mut resources, resource.kind, &resource.name, object);
        }

        let mut contents = Vec::new();
        let existing = self.existing_contents(page_id)?;
        if !existing.is_empty() {
            contents.push(Object::Reference(self.content_stream(b"q\n".to_vec())));
            contents.extend(existing);
            contents.push(Object::Reference(self.content_stream(b"\nQ\n".to_vec())));
        }
        contents.push(Object::Reference(
            self.content_stream(overlay.content.clone()),
        ));

        let page = self.doc.get_dictionary_mut(page_id)?;
        page.set("Resources", Object::Dictionary(resources));
        page.set("Contents", Object::Array(contents));
        Ok(())
    }

    fn shared_object(&mut self, kind: ResourceKind, name: &str, object: &Object) -> ObjectId {
        let key = (kind, name.to_string());
        if let Some(&id) = self.shared.get(&key) {
            return id;
        }
        let id = self.doc.add_object(object.clone());
        self.shared.insert(key, id);
        id
    }

    /// File `object` under `name` in the `kind` sub-dictionary. The
    /// sub-dictionary is inlined first so dictionaries other pages share are
    /// left untouched.
    fn add_resource(
        &self,
        resources: &mut Dictionary,
        kind: ResourceKind,
        name: &str,
        object: Object,
    ) {
        let mut category = match resources.get(kind.key()) {
            Ok(Object::Dictionary(dict)) => dict.clone(),
            Ok(Object::Reference(id)) => self
                .doc
                .get_dictionary(*id)
                .cloned()
                .unwrap_or_default(),
            _ => Dictionary::new(),
        };
        category.set(name.as_bytes(), object);
        resources.set(kind.key(), Object::Dictionary(category));
    }

    fn existing_contents(&self, page_id: ObjectId) -> Result<Vec<Object>> {
        let page = self.doc.get_dictionary(page_id)?;
        Ok(match page.get(b"Contents") {
            Ok(Object::Array(items)) => items.clone(),
            Ok(Object::Reference(id)) => match self.doc.get_object(*id) {
                Ok(Object::Array(items)) => items.clone(),
                _ => vec![Object::Reference(*id)],
            },
            _ => Vec::new(),
        })
    }

    fn content_stream(&mut self, content: Vec<u8>) -> ObjectId {
        self.doc.add_object(Stream::new(Dictionary::new(), content))
    }
}

/// Draw `overlay` over one page of `doc`.
pub fn stamp_page(doc: &mut Document, page_id: ObjectId, overlay: &Overlay) -> Result<()> {
    Stamper::new(doc).stamp_page(page_id, overlay)
}

/// Stamp `watermark` onto the pages whose zero-based index is in `pages`.
///
/// `on_page(done, total)` is called after each page of the document,
/// stamped or not. Returns the number of pages stamped.
pub fn watermark_document(
    doc: &mut Document,
    watermark: &Watermark,
    pages: &BTreeSet<usize>,
    mut on_page: impl FnMut(usize, usize),
) -> Result<usize> {
    let page_ids: Vec<ObjectId> = doc.get_pages().values().copied().collect();
    let total = page_ids.len();

    let embedded: Option<EmbeddedImage> = match watermark {
        Watermark::Image { image, .. } if !pages.is_empty() => Some(image.embed(doc)),
        _ => None,
    };

    let mut stamper = Stamper::new(doc);
    let mut stamped = 0;
    for (index, page_id) in page_ids.into_iter().enumerate() {
        if pages.contains(&index) {
            let (width, height) = page_size(stamper.document(), page_id);
            let overlay = match (watermark, &embedded) {
                (Watermark::Text(spec), _) => compose_text_overlay(width, height, spec),
                (Watermark::Image { options, .. }, Some(image)) => {
                    compose_image_overlay(width, height, image, options)
                }
                (Watermark::Image { .. }, None) => continue,
            };
            stamper.stamp_page(page_id, &overlay)?;
            stamped += 1;
        }
        on_page(index + 1, total);
    }

    Ok(stamped)
}

/// Number every page, starting at `options.start`.
pub fn number_pages(
    doc: &mut Document,
    options: &PageNumberOptions,
    mut on_page: impl FnMut(usize, usize),
) -> Result<usize> {
    options.validate()?;
    let page_ids: Vec<ObjectId> = doc.get_pages().values().copied().collect();
    let total = page_ids.len();

    let mut stamper = Stamper::new(doc);
    for (index, page_id) in page_ids.into_iter().enumerate() {
        let (width, height) = page_size(stamper.document(), page_id);
        let overlay = compose_page_number(width, height, options.start + index, options);
        stamper.stamp_page(page_id, &overlay)?;
        on_page(index + 1, total);
    }

    Ok(total)
}
