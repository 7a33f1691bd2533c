//! Watermark and page number options

use crate::constants::*;
use crate::types::{Result, StampError};
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// A fill color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Parse `#rrggbb` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    pub fn to_hex(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Text drawn across the middle of each page
#[derive(Debug, Clone, PartialEq)]
pub struct TextWatermark {
    pub text: String,
    /// Counter-clockwise, in degrees
    pub angle_degrees: f32,
    pub opacity: f32,
    pub font_size: f32,
    pub color: Rgb,
}

impl Default for TextWatermark {
    fn default() -> Self {
        Self {
            text: DEFAULT_WATERMARK_TEXT.to_string(),
            angle_degrees: DEFAULT_WATERMARK_ANGLE,
            opacity: DEFAULT_WATERMARK_OPACITY,
            font_size: DEFAULT_WATERMARK_FONT_SIZE,
            color: Rgb::BLACK,
        }
    }
}

impl TextWatermark {
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(StampError::Config("Watermark text is empty".to_string()));
        }
        check_range("Angle", self.angle_degrees, ANGLE_RANGE)?;
        check_range("Opacity", self.opacity, OPACITY_RANGE)?;
        check_range("Font size", self.font_size, FONT_SIZE_RANGE)
    }
}

/// An image centered on each page
#[derive(Debug, Clone, PartialEq)]
pub struct ImageWatermark {
    pub path: PathBuf,
    /// Points per image pixel
    pub scale: f32,
    pub opacity: f32,
}

impl Default for ImageWatermark {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            scale: DEFAULT_IMAGE_SCALE,
            opacity: DEFAULT_WATERMARK_OPACITY,
        }
    }
}

impl ImageWatermark {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(StampError::Config(
                "Select a watermark image".to_string(),
            ));
        }
        check_range("Scale", self.scale, IMAGE_SCALE_RANGE)?;
        check_range("Opacity", self.opacity, OPACITY_RANGE)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WatermarkSpec {
    Text(TextWatermark),
    Image(ImageWatermark),
}

impl WatermarkSpec {
    pub fn validate(&self) -> Result<()> {
        match self {
            WatermarkSpec::Text(text) => text.validate(),
            WatermarkSpec::Image(image) => image.validate(),
        }
    }
}

/// Page numbers drawn in the bottom-right corner
#[derive(Debug, Clone, PartialEq)]
pub struct PageNumberOptions {
    /// Number printed on the first page
    pub start: usize,
    pub font_size: f32,
    pub margin: f32,
    pub opacity: f32,
    pub color: Rgb,
}

impl Default for PageNumberOptions {
    fn default() -> Self {
        Self {
            start: 1,
            font_size: PAGE_NUMBER_FONT_SIZE,
            margin: PAGE_NUMBER_MARGIN,
            opacity: PAGE_NUMBER_OPACITY,
            color: Rgb::BLACK,
        }
    }
}

impl PageNumberOptions {
    pub fn starting_at(start: usize) -> Self {
        Self {
            start,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.font_size <= 0.0 {
            return Err(StampError::Config(
                "Font size must be positive".to_string(),
            ));
        }
        if self.margin < 0.0 {
            return Err(StampError::Config(
                "Margin cannot be negative".to_string(),
            ));
        }
        check_range("Opacity", self.opacity, OPACITY_RANGE)
    }
}

fn check_range(name: &str, value: f32, range: RangeInclusive<f32>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(StampError::Config(format!(
            "{name} must be between {} and {}, got {value}",
            range.start(),
            range.end()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors() {
        assert_eq!(Rgb::from_hex("#000000"), Some(Rgb::BLACK));
        assert_eq!(Rgb::from_hex("ff0000").map(|c| c.r), Some(1.0));
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
        assert_eq!(Rgb::from_hex("#3366cc").unwrap().to_hex(), "#3366cc");
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(TextWatermark::default().validate().is_ok());
        assert!(PageNumberOptions::default().validate().is_ok());
        assert!(ImageWatermark::new("logo.png").validate().is_ok());
    }

    #[test]
    fn test_out_of_range_options() {
        let text = TextWatermark {
            opacity: 0.0,
            ..Default::default()
        };
        assert!(text.validate().is_err());

        let blank = TextWatermark {
            text: "  ".to_string(),
            ..Default::default()
        };
        assert!(blank.validate().is_err());

        assert!(ImageWatermark::default().validate().is_err());
    }
}
