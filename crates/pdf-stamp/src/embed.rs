//! Raster images embedded as image XObjects

use crate::types::*;
use image::DynamicImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::path::Path;

/// A decoded image, split into color and alpha planes ready to embed
#[derive(Debug, Clone)]
pub struct WatermarkImage {
    pub width: u32,
    pub height: u32,
    rgb: Vec<u8>,
    /// `None` when every pixel is opaque
    alpha: Option<Vec<u8>>,
}

/// An image already added to a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedImage {
    pub id: ObjectId,
    pub width: u32,
    pub height: u32,
}

impl WatermarkImage {
    /// Decode a png, jpeg or webp file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_image(image::open(path)?))
    }

    pub fn from_image(image: DynamicImage) -> Self {
        let rgba = image.into_rgba8();
        let (width, height) = rgba.dimensions();
        let mut rgb = Vec::with_capacity((width * height * 3) as usize);
        let mut alpha = Vec::with_capacity((width * height) as usize);
        for pixel in rgba.pixels() {
            rgb.extend_from_slice(&pixel.0[..3]);
            alpha.push(pixel.0[3]);
        }
        let alpha = alpha.iter().any(|&a| a != u8::MAX).then_some(alpha);
        Self {
            width,
            height,
            rgb,
            alpha,
        }
    }

    pub fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    /// Add the image (and its soft mask) to `doc`.
    pub fn embed(&self, doc: &mut Document) -> EmbeddedImage {
        let mut dict = image_dict(self.width, self.height, "DeviceRGB");
        if let Some(alpha) = &self.alpha {
            let mask = Stream::new(
                image_dict(self.width, self.height, "DeviceGray"),
                alpha.clone(),
            );
            dict.set("SMask", Object::Reference(doc.add_object(mask)));
        }

        EmbeddedImage {
            id: doc.add_object(Stream::new(dict, self.rgb.clone())),
            width: self.width,
            height: self.height,
        }
    }
}

fn image_dict(width: u32, height: u32, color_space: &str) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(width as i64));
    dict.set("Height", Object::Integer(height as i64));
    dict.set("ColorSpace", Object::Name(color_space.as_bytes().to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict
}
