//! Watermarks and page numbers for existing PDFs
//!
//! Each stamp is composed as an [`Overlay`] sized to the target page, then
//! drawn over the page's existing content.

pub mod constants;
mod embed;
mod options;
mod overlay;
mod stamp;
mod types;

pub use embed::{EmbeddedImage, WatermarkImage};
pub use options::{ImageWatermark, PageNumberOptions, Rgb, TextWatermark, WatermarkSpec};
pub use overlay::{
    Overlay, OverlayResource, ResourceKind, compose_image_overlay, compose_page_number,
    compose_text_overlay,
};
pub use stamp::{Stamper, Watermark, number_pages, stamp_page, watermark_document};
pub use types::*;
