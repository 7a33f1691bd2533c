use eframe::egui;
use pdf_async_runtime::{JobCommand, JobRunner};
use std::path::PathBuf;

use crate::feedback::Feedback;
use crate::ui_components::{PathKind, password_field, path_picker, save_pdf_dialog, suggested_name};

#[derive(Default)]
pub struct ProtectState {
    pub input: Option<PathBuf>,
    pub user_password: String,
    pub owner_password: String,
    pub unlock_password: String,
}

pub fn show_protect(
    ui: &mut egui::Ui,
    state: &mut ProtectState,
    runner: &JobRunner,
    feedback: &mut Feedback,
) {
    ui.heading("Password Protection");
    ui.add_space(4.0);
    path_picker(ui, "PDF:", &mut state.input, PathKind::PdfFile);

    ui.separator();
    ui.strong("Add password");
    password_field(ui, "User password:", &mut state.user_password);
    password_field(ui, "Owner password:", &mut state.owner_password);
    ui.weak("The owner password defaults to the user password when left empty.");

    let has_password = !state.user_password.is_empty() || !state.owner_password.is_empty();
    if ui
        .add_enabled(
            state.input.is_some() && has_password,
            egui::Button::new("🔒 Protect & Save..."),
        )
        .clicked()
    {
        if let Some(input) = state.input.clone() {
            let name = suggested_name(Some(&input), "_protected", "protected.pdf");
            if let Some(output) = save_pdf_dialog(&name) {
                feedback.submit(
                    runner,
                    JobCommand::Protect {
                        input,
                        output,
                        user_password: state.user_password.clone(),
                        owner_password: state.owner_password.clone(),
                    },
                );
            }
        }
    }

    ui.separator();
    ui.strong("Remove password");
    password_field(ui, "Password:", &mut state.unlock_password);
    if ui
        .add_enabled(
            state.input.is_some() && !state.unlock_password.is_empty(),
            egui::Button::new("🔓 Unlock & Save..."),
        )
        .clicked()
    {
        if let Some(input) = state.input.clone() {
            let name = suggested_name(Some(&input), "_unlocked", "unlocked.pdf");
            if let Some(output) = save_pdf_dialog(&name) {
                feedback.submit(
                    runner,
                    JobCommand::Unlock {
                        input,
                        output,
                        password: state.unlock_password.clone(),
                    },
                );
            }
        }
    }
}
