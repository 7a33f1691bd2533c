use eframe::egui;
use pdf_async_runtime::{
    ImageWatermark, JobCommand, JobRunner, PageNumberOptions, Rgb, TextWatermark, WatermarkSpec,
};
use pdf_stamp::constants::{ANGLE_RANGE, FONT_SIZE_RANGE, IMAGE_SCALE_RANGE, OPACITY_RANGE};
use std::path::PathBuf;

use crate::feedback::Feedback;
use crate::ui_components::{
    PathKind, SliderBuilder, path_picker, pick_output_folder, save_pdf_dialog,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Tab {
    #[default]
    Text,
    Image,
}

pub struct WatermarkState {
    tab: Tab,
    pub source: Option<PathBuf>,
    pub folder: Option<PathBuf>,
    pub text: TextWatermark,
    /// sRGB picker value for `text.color`
    color: [u8; 3],
    pub image_path: Option<PathBuf>,
    pub image_scale: f32,
    pub image_opacity: f32,
    pub ranges: String,
    pub number_start: usize,
}

impl Default for WatermarkState {
    fn default() -> Self {
        let image = ImageWatermark::default();
        Self {
            tab: Tab::default(),
            source: None,
            folder: None,
            text: TextWatermark::default(),
            color: [0, 0, 0],
            image_path: None,
            image_scale: image.scale,
            image_opacity: image.opacity,
            ranges: String::new(),
            number_start: 1,
        }
    }
}

impl WatermarkState {
    /// Text wins when there is any; otherwise the picked image is used.
    pub fn spec(&self) -> Option<WatermarkSpec> {
        if !self.text.text.trim().is_empty() {
            let mut text = self.text.clone();
            text.color = rgb(self.color);
            return Some(WatermarkSpec::Text(text));
        }
        let path = self.image_path.clone()?;
        Some(WatermarkSpec::Image(ImageWatermark {
            path,
            scale: self.image_scale,
            opacity: self.image_opacity,
        }))
    }
}

pub fn show_watermark(
    ui: &mut egui::Ui,
    state: &mut WatermarkState,
    runner: &JobRunner,
    feedback: &mut Feedback,
) {
    ui.heading("Watermark (Text / Image)");
    ui.add_space(4.0);

    path_picker(ui, "Source PDF:", &mut state.source, PathKind::PdfFile);
    path_picker(ui, "Batch folder:", &mut state.folder, PathKind::Folder);
    ui.separator();

    ui.horizontal(|ui| {
        ui.selectable_value(&mut state.tab, Tab::Text, "Text Watermark");
        ui.selectable_value(&mut state.tab, Tab::Image, "Image Watermark");
    });
    ui.add_space(4.0);
    match state.tab {
        Tab::Text => show_text_options(ui, state),
        Tab::Image => show_image_options(ui, state),
    }

    ui.separator();
    ui.label("Page ranges (e.g. 1-3,5); leave empty for all pages:");
    ui.text_edit_singleline(&mut state.ranges);
    ui.add_space(8.0);

    let spec = state.spec();
    ui.horizontal(|ui| {
        let single = state.source.clone().zip(spec.clone());
        if ui
            .add_enabled(single.is_some(), egui::Button::new("Apply to Single PDF..."))
            .clicked()
        {
            if let Some((input, spec)) = single {
                if let Some(output) = save_pdf_dialog("watermarked.pdf") {
                    feedback.submit(
                        runner,
                        JobCommand::Watermark {
                            input,
                            output,
                            spec,
                            ranges: state.ranges.clone(),
                        },
                    );
                }
            }
        }

        let batch = state.folder.clone().zip(spec);
        if ui
            .add_enabled(batch.is_some(), egui::Button::new("Apply to Folder (batch)..."))
            .clicked()
        {
            if let Some((input_dir, spec)) = batch {
                if let Some(output_dir) =
                    pick_output_folder("Select output folder for watermarked files")
                {
                    feedback.submit(
                        runner,
                        JobCommand::WatermarkFolder {
                            input_dir,
                            output_dir,
                            spec,
                            ranges: state.ranges.clone(),
                        },
                    );
                }
            }
        }
    });

    ui.separator();
    ui.horizontal(|ui| {
        ui.label("Start page number:");
        ui.add(egui::DragValue::new(&mut state.number_start).range(0..=100_000));
        if ui
            .add_enabled(state.source.is_some(), egui::Button::new("🔢 Add Page Numbers..."))
            .clicked()
        {
            if let Some(input) = state.source.clone() {
                if let Some(output) = save_pdf_dialog("pagenum.pdf") {
                    feedback.submit(
                        runner,
                        JobCommand::NumberPages {
                            input,
                            output,
                            options: PageNumberOptions::starting_at(state.number_start),
                        },
                    );
                }
            }
        }
    });
}

fn show_text_options(ui: &mut egui::Ui, state: &mut WatermarkState) {
    ui.horizontal(|ui| {
        ui.label("Text:");
        ui.text_edit_singleline(&mut state.text.text);
    });
    SliderBuilder::new(&mut state.text.angle_degrees, ANGLE_RANGE)
        .text("Angle")
        .suffix("°")
        .decimals(0)
        .show(ui);
    SliderBuilder::new(&mut state.text.opacity, OPACITY_RANGE)
        .text("Opacity")
        .decimals(1)
        .show(ui);
    SliderBuilder::new(&mut state.text.font_size, FONT_SIZE_RANGE)
        .text("Font size")
        .suffix(" pt")
        .decimals(0)
        .show(ui);
    ui.horizontal(|ui| {
        ui.label("Color:");
        ui.color_edit_button_srgb(&mut state.color);
        ui.monospace(rgb(state.color).to_hex());
    });
}

fn show_image_options(ui: &mut egui::Ui, state: &mut WatermarkState) {
    path_picker(ui, "Image:", &mut state.image_path, PathKind::ImageFile);
    SliderBuilder::new(&mut state.image_scale, IMAGE_SCALE_RANGE)
        .text("Scale")
        .decimals(1)
        .show(ui);
    SliderBuilder::new(&mut state.image_opacity, OPACITY_RANGE)
        .text("Opacity")
        .decimals(1)
        .show(ui);
    if !state.text.text.trim().is_empty() {
        ui.weak("Clear the watermark text to apply the image instead.");
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Rgb {
    Rgb {
        r: f32::from(r) / 255.0,
        g: f32::from(g) / 255.0,
        b: f32::from(b) / 255.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_takes_precedence_over_image() {
        let mut state = WatermarkState {
            image_path: Some(PathBuf::from("logo.png")),
            color: [255, 0, 0],
            ..WatermarkState::default()
        };
        match state.spec() {
            Some(WatermarkSpec::Text(text)) => {
                assert_eq!(text.text, "CONFIDENTIAL");
                assert_eq!(text.color.to_hex(), "#ff0000");
            }
            other => panic!("expected a text watermark, got {other:?}"),
        }

        state.text.text.clear();
        assert!(matches!(state.spec(), Some(WatermarkSpec::Image(_))));
    }

    #[test]
    fn nothing_to_apply_without_text_or_image() {
        let mut state = WatermarkState::default();
        state.text.text = "   ".into();
        assert!(state.spec().is_none());
    }
}
