use eframe::egui;
use log::Level;

use crate::logger::AppLogger;

pub fn show_log(ui: &mut egui::Ui, logger: &AppLogger) {
    ui.horizontal(|ui| {
        ui.strong("Log");
        if ui.small_button("Clear").clicked() {
            logger.clear();
        }
    });

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for entry in logger.entries() {
                let color = match entry.level {
                    Level::Error => ui.visuals().error_fg_color,
                    Level::Warn => ui.visuals().warn_fg_color,
                    _ => ui.visuals().text_color(),
                };
                ui.horizontal(|ui| {
                    ui.monospace(entry.timestamp.format("%H:%M:%S").to_string());
                    ui.colored_label(color, format!("{:<5}", entry.level));
                    ui.label(&entry.message).on_hover_text(&entry.target);
                });
            }
        });
}
