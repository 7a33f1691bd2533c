use eframe::egui;
use pdf_async_runtime::{JobCommand, JobRunner};
use std::path::PathBuf;

use crate::feedback::Feedback;
use crate::ui_components::{PathKind, path_picker, pick_output_folder};

#[derive(Default)]
pub struct SplitState {
    pub input: Option<PathBuf>,
    pub ranges: String,
    /// Page count of `input`, read when it is picked
    pub page_count: Option<usize>,
}

pub fn show_split(
    ui: &mut egui::Ui,
    state: &mut SplitState,
    runner: &JobRunner,
    feedback: &mut Feedback,
) {
    ui.heading("Split / Extract Pages");
    ui.add_space(4.0);

    if path_picker(ui, "Source PDF:", &mut state.input, PathKind::PdfFile) {
        state.page_count = state.input.as_deref().and_then(|path| {
            pdf_organize::count_pages(path)
                .inspect_err(|e| log::warn!("Could not read {}: {e}", path.display()))
                .ok()
        });
    }
    if let Some(count) = state.page_count {
        ui.label(format!("{count} pages"));
    }

    ui.separator();
    ui.label("Ranges, one output file each (e.g. 1-3,5,7-):");
    ui.text_edit_singleline(&mut state.ranges);

    let has_input = state.input.is_some();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(
                has_input && !state.ranges.trim().is_empty(),
                egui::Button::new("✂ Extract Ranges..."),
            )
            .clicked()
        {
            if let (Some(input), Some(output_dir)) = (
                state.input.clone(),
                pick_output_folder("Select Output Folder for Split Files"),
            ) {
                feedback.submit(
                    runner,
                    JobCommand::Extract {
                        input,
                        ranges: state.ranges.clone(),
                        output_dir,
                    },
                );
            }
        }

        if ui
            .add_enabled(has_input, egui::Button::new("📄 Split Every Page..."))
            .clicked()
        {
            if let (Some(input), Some(output_dir)) = (
                state.input.clone(),
                pick_output_folder("Select Output Folder"),
            ) {
                feedback.submit(runner, JobCommand::SplitAll { input, output_dir });
            }
        }
    });
}
