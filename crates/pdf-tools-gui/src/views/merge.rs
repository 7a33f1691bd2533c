use eframe::egui;
use pdf_async_runtime::{JobCommand, JobRunner};
use pdf_organize::default_merged_filename;
use std::path::PathBuf;

use crate::feedback::Feedback;
use crate::ui_components::{FileListEditor, save_pdf_dialog};

#[derive(Default)]
pub struct MergeState {
    pub files: Vec<PathBuf>,
}

pub fn show_merge(
    ui: &mut egui::Ui,
    state: &mut MergeState,
    runner: &JobRunner,
    feedback: &mut Feedback,
) {
    ui.heading("Merge PDFs");
    ui.weak("Pages are written in list order.");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        if ui.button("➕ Add PDF Files...").clicked() {
            if let Some(paths) = rfd::FileDialog::new()
                .add_filter("PDF", &["pdf"])
                .pick_files()
            {
                state.files.extend(paths);
            }
        }
        if ui
            .add_enabled(!state.files.is_empty(), egui::Button::new("Clear"))
            .clicked()
        {
            state.files.clear();
        }
    });

    ui.separator();
    egui::ScrollArea::vertical()
        .max_height(ui.available_height() - 60.0)
        .show(ui, |ui| {
            FileListEditor::new(&mut state.files).show(ui);
        });
    ui.separator();

    let can_merge = !state.files.is_empty();
    if ui
        .add_enabled(can_merge, egui::Button::new("🔗 Merge & Save..."))
        .on_disabled_hover_text("Add at least one PDF")
        .clicked()
    {
        if let Some(output) = save_pdf_dialog(&default_merged_filename(state.files.as_slice())) {
            feedback.submit(
                runner,
                JobCommand::Merge {
                    inputs: state.files.clone(),
                    output,
                },
            );
        }
    }
}
