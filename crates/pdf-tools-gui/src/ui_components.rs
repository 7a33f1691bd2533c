use eframe::egui;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Slider over a fixed option range; values outside it cannot be entered.
pub struct SliderBuilder<'a> {
    value: &'a mut f32,
    range: RangeInclusive<f32>,
    text: String,
    suffix: Option<String>,
    decimals: Option<usize>,
}

impl<'a> SliderBuilder<'a> {
    pub fn new(value: &'a mut f32, range: RangeInclusive<f32>) -> Self {
        Self {
            value,
            range,
            text: String::new(),
            suffix: None,
            decimals: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut slider =
            egui::Slider::new(self.value, self.range).clamping(egui::SliderClamping::Always);

        if !self.text.is_empty() {
            slider = slider.text(self.text);
        }
        if let Some(suffix) = self.suffix {
            slider = slider.suffix(suffix);
        }
        if let Some(decimals) = self.decimals {
            slider = slider.fixed_decimals(decimals);
        }

        ui.add(slider).changed()
    }
}

/// Ordered list of input files with move and remove controls
pub struct FileListEditor<'a> {
    files: &'a mut Vec<PathBuf>,
}

impl<'a> FileListEditor<'a> {
    pub fn new(files: &'a mut Vec<PathBuf>) -> Self {
        Self { files }
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        if self.files.is_empty() {
            ui.label("No files selected");
            return false;
        }

        let last = self.files.len() - 1;
        let mut edit = None;

        for (idx, path) in self.files.iter().enumerate() {
            ui.horizontal(|ui| {
                if ui.add_enabled(idx > 0, egui::Button::new("▲").small()).clicked() {
                    edit = Some(ListEdit::Swap(idx, idx - 1));
                }
                if ui.add_enabled(idx < last, egui::Button::new("▼").small()).clicked() {
                    edit = Some(ListEdit::Swap(idx, idx + 1));
                }
                if ui.small_button("✖").clicked() {
                    edit = Some(ListEdit::Remove(idx));
                }
                ui.label(format!("{}. {}", idx + 1, file_name(path)))
                    .on_hover_text(path.display().to_string());
            });
        }

        match edit {
            Some(ListEdit::Swap(a, b)) => self.files.swap(a, b),
            Some(ListEdit::Remove(idx)) => {
                self.files.remove(idx);
            }
            None => return false,
        }
        true
    }
}

enum ListEdit {
    Swap(usize, usize),
    Remove(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    PdfFile,
    ImageFile,
    Folder,
}

impl PathKind {
    fn pick(self) -> Option<PathBuf> {
        let dialog = rfd::FileDialog::new();
        match self {
            PathKind::PdfFile => dialog.add_filter("PDF", &["pdf"]).pick_file(),
            PathKind::ImageFile => dialog
                .add_filter("Images", &["png", "jpg", "jpeg", "webp", "bmp", "gif"])
                .pick_file(),
            PathKind::Folder => dialog.pick_folder(),
        }
    }
}

/// A labeled path with a browse button. Returns true when the path changed.
pub fn path_picker(
    ui: &mut egui::Ui,
    label: &str,
    path: &mut Option<PathBuf>,
    kind: PathKind,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        let shown = path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string());
        ui.monospace(shown);
        if ui.button("Browse...").clicked() {
            if let Some(picked) = kind.pick() {
                *path = Some(picked);
                return true;
            }
        }
        false
    })
    .inner
}

/// Ask where to save a PDF, suggesting `file_name`.
pub fn save_pdf_dialog(file_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("PDF", &["pdf"])
        .set_file_name(file_name)
        .save_file()
}

pub fn pick_output_folder(title: &str) -> Option<PathBuf> {
    rfd::FileDialog::new().set_title(title).pick_folder()
}

pub fn password_field(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(value).password(true));
    });
}

/// Last path component, or the whole path when there is none
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// `{stem}{suffix}.pdf`, used to suggest output names
pub fn suggested_name(input: Option<&Path>, suffix: &str, fallback: &str) -> String {
    input
        .and_then(Path::file_stem)
        .map(|stem| format!("{}{suffix}.pdf", stem.to_string_lossy()))
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggested_name_uses_the_input_stem() {
        let input = Path::new("/docs/report.pdf");
        assert_eq!(suggested_name(Some(input), "_protected", "protected.pdf"), "report_protected.pdf");
        assert_eq!(suggested_name(None, "_protected", "protected.pdf"), "protected.pdf");
    }

    #[test]
    fn file_name_falls_back_to_the_path() {
        assert_eq!(file_name(Path::new("/a/b.pdf")), "b.pdf");
        assert_eq!(file_name(Path::new("/")), "/");
    }
}
