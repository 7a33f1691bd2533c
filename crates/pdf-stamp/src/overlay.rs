//! Overlay composition
//!
//! An [`Overlay`] is a content stream plus the resources it names, laid out
//! for one page size. [`stamp_page`](crate::stamp_page) draws it on top of
//! an existing page.

use crate::constants::*;
use crate::embed::EmbeddedImage;
use crate::options::{ImageWatermark, PageNumberOptions, Rgb, TextWatermark};
use lopdf::{Dictionary, Object};

/// Resource category an overlay entry is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Font,
    ExtGState,
    XObject,
}

impl ResourceKind {
    pub fn key(&self) -> &'static [u8] {
        match self {
            ResourceKind::Font => b"Font",
            ResourceKind::ExtGState => b"ExtGState",
            ResourceKind::XObject => b"XObject",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayResource {
    pub kind: ResourceKind,
    pub name: String,
    /// Either a direct value, added to the document once when stamped, or a
    /// reference to an object already in the document
    pub object: Object,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Overlay {
    pub content: Vec<u8>,
    pub resources: Vec<OverlayResource>,
}

#[derive(Clone, Copy)]
enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    fn resource_name(self) -> String {
        match self {
            Font::Helvetica => format!("{RESOURCE_PREFIX}Helv"),
            Font::HelveticaBold => format!("{RESOURCE_PREFIX}HelvB"),
        }
    }

    fn resource(self) -> OverlayResource {
        let base_font: &[u8] = match self {
            Font::Helvetica => b"Helvetica",
            Font::HelveticaBold => b"Helvetica-Bold",
        };
        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name(b"Font".to_vec()));
        dict.set("Subtype", Object::Name(b"Type1".to_vec()));
        dict.set("BaseFont", Object::Name(base_font.to_vec()));
        dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
        OverlayResource {
            kind: ResourceKind::Font,
            name: self.resource_name(),
            object: Object::Dictionary(dict),
        }
    }

    /// Approximate width of `text` set in this font
    fn text_width(self, text: &str, font_size: f32) -> f32 {
        let other = match self {
            Font::Helvetica => HELVETICA_DIGIT_WIDTH,
            Font::HelveticaBold => HELVETICA_BOLD_CHAR_WIDTH_RATIO,
        };
        text.chars()
            .map(|c| match c {
                '0'..='9' => HELVETICA_DIGIT_WIDTH,
                ' ' => HELVETICA_SPACE_WIDTH,
                _ => other,
            })
            .sum::<f32>()
            * font_size
    }
}

/// Transparency state for one opacity, named after its percentage
fn opacity_state(opacity: f32) -> OverlayResource {
    let opacity = opacity.clamp(0.0, 1.0);
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"ExtGState".to_vec()));
    dict.set("ca", Object::Real(opacity));
    dict.set("CA", Object::Real(opacity));
    OverlayResource {
        kind: ResourceKind::ExtGState,
        name: format!("{RESOURCE_PREFIX}Gs{}", (opacity * 100.0).round() as u32),
        object: Object::Dictionary(dict),
    }
}

/// Text centered on the page, rotated about the page center.
pub fn compose_text_overlay(page_width: f32, page_height: f32, spec: &TextWatermark) -> Overlay {
    let font = Font::HelveticaBold;
    let gs = opacity_state(spec.opacity);
    let (sin, cos) = spec.angle_degrees.to_radians().sin_cos();
    let half_width = font.text_width(&spec.text, spec.font_size) / 2.0;

    let mut content = format!(
        "q\n1 0 0 1 {:.2} {:.2} cm\n{cos:.4} {sin:.4} {:.4} {cos:.4} 0 0 cm\n/{} gs\n{}BT /{} {:.2} Tf {:.2} 0 Td ",
        page_width / 2.0,
        page_height / 2.0,
        -sin,
        gs.name,
        fill_color(spec.color),
        font.resource_name(),
        spec.font_size,
        -half_width,
    )
    .into_bytes();
    content.extend(literal_string(&spec.text));
    content.extend_from_slice(b" Tj ET\nQ\n");

    Overlay {
        content,
        resources: vec![font.resource(), gs],
    }
}

/// `image` drawn at `spec.scale` points per pixel, centered on the page.
pub fn compose_image_overlay(
    page_width: f32,
    page_height: f32,
    image: &EmbeddedImage,
    spec: &ImageWatermark,
) -> Overlay {
    let gs = opacity_state(spec.opacity);
    let name = format!("{RESOURCE_PREFIX}Im{}", image.id.0);
    let width = image.width as f32 * spec.scale;
    let height = image.height as f32 * spec.scale;

    let content = format!(
        "q\n/{} gs\n{width:.2} 0 0 {height:.2} {:.2} {:.2} cm\n/{name} Do\nQ\n",
        gs.name,
        (page_width - width) / 2.0,
        (page_height - height) / 2.0,
    )
    .into_bytes();

    Overlay {
        content,
        resources: vec![
            gs,
            OverlayResource {
                kind: ResourceKind::XObject,
                name,
                object: Object::Reference(image.id),
            },
        ],
    }
}

/// `number` right-aligned in the bottom-right corner.
pub fn compose_page_number(
    page_width: f32,
    _page_height: f32,
    number: usize,
    options: &PageNumberOptions,
) -> Overlay {
    let font = Font::Helvetica;
    let gs = opacity_state(options.opacity);
    let text = number.to_string();
    let x = page_width - options.margin - font.text_width(&text, options.font_size);

    let content = format!(
        "q\n/{} gs\n{}BT /{} {:.2} Tf {x:.2} {:.2} Td ({text}) Tj ET\nQ\n",
        gs.name,
        fill_color(options.color),
        font.resource_name(),
        options.font_size,
        options.margin,
    )
    .into_bytes();

    Overlay {
        content,
        resources: vec![font.resource(), gs],
    }
}

fn fill_color(color: Rgb) -> String {
    format!("{:.3} {:.3} {:.3} rg\n", color.r, color.g, color.b)
}

/// A PDF literal string in WinAnsi; characters outside Latin-1 become `?`.
fn literal_string(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 2);
    out.push(b'(');
    for c in text.chars() {
        let byte = u8::try_from(u32::from(c)).unwrap_or(b'?');
        if matches!(byte, b'(' | b')' | b'\\') {
            out.push(b'\\');
        }
        out.push(byte);
    }
    out.push(b')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_string_escapes() {
        assert_eq!(literal_string("a(b)\\"), b"(a\\(b\\)\\\\)".to_vec());
        assert_eq!(literal_string("caf\u{e9}"), b"(caf\xe9)".to_vec());
        assert_eq!(literal_string("\u{4e2d}"), b"(?)".to_vec());
    }

    #[test]
    fn test_page_number_is_right_aligned() {
        let options = PageNumberOptions::default();
        let overlay = compose_page_number(612.0, 792.0, 12, &options);
        let text = String::from_utf8(overlay.content).unwrap();
        // Two digits at 10pt, 20pt in from the right edge
        let x = 612.0 - 20.0 - 2.0 * HELVETICA_DIGIT_WIDTH * 10.0;
        assert!(text.contains(&format!("{x:.2} 20.00 Td (12) Tj")));
    }

    #[test]
    fn test_opacity_state_names_by_percent() {
        assert_eq!(opacity_state(0.6).name, format!("{RESOURCE_PREFIX}Gs60"));
        assert_eq!(opacity_state(2.0).name, format!("{RESOURCE_PREFIX}Gs100"));
    }
}
