use eframe::egui;

const FEATURES: [&str; 6] = [
    "Merge PDFs: combine files in any order, with a suggested output name.",
    "Split / Extract: one file per range, or one file per page.",
    "Watermark: text or image, on selected pages, for one file or a whole folder.",
    "Password protection: add or remove user and owner passwords.",
    "Page numbering: stamp numbers in the bottom-right corner.",
    "Visual organizer: thumbnails, drag to reorder, rotate, remove, insert pages.",
];

pub fn show_about(ui: &mut egui::Ui, renderer_available: bool) {
    ui.vertical_centered(|ui| {
        ui.add_space(30.0);
        ui.heading(format!("PDF Tools {}", env!("CARGO_PKG_VERSION")));
        ui.add_space(10.0);
        ui.label("Merge, split, watermark, number, protect and reorganize PDF documents.");
        ui.add_space(20.0);
    });

    ui.strong("Features:");
    for feature in FEATURES {
        ui.label(format!("• {feature}"));
    }

    ui.add_space(20.0);
    if renderer_available {
        ui.label("Page thumbnails: pdfium");
    } else {
        ui.colored_label(
            ui.visuals().warn_fg_color,
            "Page thumbnails unavailable: pdfium could not be loaded",
        );
    }
}
