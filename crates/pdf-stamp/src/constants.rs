//! Defaults and limits for watermarks and page numbers

use std::ops::RangeInclusive;

pub const DEFAULT_WATERMARK_TEXT: &str = "CONFIDENTIAL";
pub const DEFAULT_WATERMARK_ANGLE: f32 = 45.0;
pub const DEFAULT_WATERMARK_OPACITY: f32 = 0.5;
pub const DEFAULT_WATERMARK_FONT_SIZE: f32 = 50.0;
pub const DEFAULT_IMAGE_SCALE: f32 = 1.0;

pub const ANGLE_RANGE: RangeInclusive<f32> = 0.0..=360.0;
pub const OPACITY_RANGE: RangeInclusive<f32> = 0.1..=1.0;
pub const FONT_SIZE_RANGE: RangeInclusive<f32> = 10.0..=200.0;
pub const IMAGE_SCALE_RANGE: RangeInclusive<f32> = 0.1..=5.0;

pub const PAGE_NUMBER_FONT_SIZE: f32 = 10.0;
/// Distance from the right and bottom page edges, in points
pub const PAGE_NUMBER_MARGIN: f32 = 20.0;
pub const PAGE_NUMBER_OPACITY: f32 = 0.6;

/// Advance widths as a fraction of the font size
pub const HELVETICA_DIGIT_WIDTH: f32 = 0.556;
pub const HELVETICA_SPACE_WIDTH: f32 = 0.278;
pub const HELVETICA_BOLD_CHAR_WIDTH_RATIO: f32 = 0.6;

/// Prefix for every resource name added to a stamped page
pub const RESOURCE_PREFIX: &str = "PdftWm";
