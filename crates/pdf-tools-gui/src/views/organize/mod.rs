//! Visual organizer: a grid of page thumbnails that can be reordered by
//! dragging, rotated, removed, previewed and extended with more files.

mod state;

pub use state::OrganizeState;

use eframe::egui;
use pdf_async_runtime::{JobCommand, JobRunner, PageRef, Placement};
use pdf_organize::PageId;
use pdf_organize::constants::{CELL_SPACING, THUMBNAIL_MAX_SIZE};
use std::path::PathBuf;

use crate::feedback::Feedback;
use crate::ui_components::{file_name, save_pdf_dialog};

const CARD_LABEL_HEIGHT: f32 = 48.0;

enum CardAction {
    Select(PageId),
    Preview(PageId),
    Rotate(PageId),
    Remove(PageId),
    InsertBefore(PageId),
    InsertAfter(PageId),
}

pub fn show_organize(
    ui: &mut egui::Ui,
    state: &mut OrganizeState,
    runner: &JobRunner,
    feedback: &mut Feedback,
) {
    ui.heading("Organize Pages");
    ui.weak("Drag thumbnails to reorder. Select a page to insert files before or after it.");
    ui.add_space(4.0);

    show_toolbar(ui, state, runner, feedback);
    ui.separator();

    if state.collection.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("Open a PDF to start organizing its pages");
        });
    } else {
        let actions = egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| show_grid(ui, state))
            .inner;
        for action in actions {
            apply(action, state, runner, feedback);
        }
    }

    show_preview_window(ui.ctx(), state);
}

fn show_toolbar(
    ui: &mut egui::Ui,
    state: &mut OrganizeState,
    runner: &JobRunner,
    feedback: &mut Feedback,
) {
    ui.horizontal(|ui| {
        if ui.button("📂 Open PDF...").clicked() {
            if let Some(path) = pick_pdf() {
                load(path, Placement::Replace, runner, feedback);
            }
        }
        if ui.button("➕ Add Pages to End...").clicked() {
            if let Some(path) = pick_pdf() {
                load(path, Placement::Append, runner, feedback);
            }
        }
        if ui
            .add_enabled(!state.collection.is_empty(), egui::Button::new("Clear"))
            .clicked()
        {
            state.clear();
        }

        ui.label(format!(
            "{} ({} pages)",
            state.source_summary(),
            state.collection.len()
        ));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(
                    !state.collection.is_empty(),
                    egui::Button::new("💾 Save Changes..."),
                )
                .clicked()
            {
                if let Some(output) = save_pdf_dialog("organized.pdf") {
                    feedback.submit(
                        runner,
                        JobCommand::OrganizeSave {
                            pages: state.collection.snapshot(),
                            output,
                        },
                    );
                }
            }
        });
    });
}

/// Lay out every card, follow an active drag, and collect what was clicked.
fn show_grid(ui: &mut egui::Ui, state: &mut OrganizeState) -> Vec<CardAction> {
    ui.spacing_mut().item_spacing = egui::vec2(CELL_SPACING, CELL_SPACING);
    let origin = ui.cursor().min;
    let columns = state.layout.columns();
    let rows = state.layout.rows_for(state.collection.len());
    let entries: Vec<(PageId, PageRef)> = state
        .collection
        .iter()
        .map(|entry| (entry.id, entry.page.clone()))
        .collect();

    let mut actions = Vec::new();
    let mut measured = None;

    for row in 0..rows {
        ui.horizontal(|ui| {
            for (id, page) in entries.iter().skip(row * columns).take(columns) {
                let card = show_card(ui, state, *id, page, &mut actions);
                measured.get_or_insert(card.rect.size());
            }
        });
    }

    if let Some(size) = measured {
        state.cell = pdf_organize::CellSize::from_card(size.x, size.y);
    }

    follow_drag(ui, state, origin);
    actions
}

fn show_card(
    ui: &mut egui::Ui,
    state: &mut OrganizeState,
    id: PageId,
    page: &PageRef,
    actions: &mut Vec<CardAction>,
) -> egui::Response {
    let selected = state.selected == Some(id);
    let dragging = state.drag.dragging() == Some(id);
    let stroke = if selected || dragging {
        ui.visuals().selection.stroke
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke
    };

    egui::Frame::group(ui.style())
        .stroke(stroke)
        .show(ui, |ui| {
            ui.set_width(THUMBNAIL_MAX_SIZE.0 as f32);
            ui.vertical_centered(|ui| {
                let thumb_size = egui::vec2(THUMBNAIL_MAX_SIZE.0 as f32, THUMBNAIL_MAX_SIZE.1 as f32);
                let (rect, response) = ui.allocate_exact_size(
                    thumb_size,
                    egui::Sense::click_and_drag(),
                );
                let response = response.on_hover_cursor(egui::CursorIcon::Grab);
                paint_thumbnail(ui, rect, state.thumbnails.get(&id), page);

                if response.drag_started() {
                    state.drag.start(id);
                    actions.push(CardAction::Select(id));
                } else if response.double_clicked() {
                    actions.push(CardAction::Preview(id));
                } else if response.clicked() {
                    actions.push(CardAction::Select(id));
                }

                ui.allocate_ui(egui::vec2(thumb_size.x, CARD_LABEL_HEIGHT), |ui| {
                    ui.small(format!(
                        "{}\nPg {}",
                        short_name(&file_name(page.source())),
                        page.original_index + 1
                    ));
                    ui.horizontal(|ui| {
                        if selected && ui.small_button("➕◀").on_hover_text("Insert a PDF before this page").clicked() {
                            actions.push(CardAction::InsertBefore(id));
                        }
                        if ui.small_button("🔍").on_hover_text("View large").clicked() {
                            actions.push(CardAction::Preview(id));
                        }
                        if ui.small_button("↻").on_hover_text("Rotate clockwise").clicked() {
                            actions.push(CardAction::Rotate(id));
                        }
                        if ui.small_button("🗑").on_hover_text("Remove page").clicked() {
                            actions.push(CardAction::Remove(id));
                        }
                        if selected && ui.small_button("▶➕").on_hover_text("Insert a PDF after this page").clicked() {
                            actions.push(CardAction::InsertAfter(id));
                        }
                    });
                });
            });
        })
        .response
}

/// Draw the thumbnail turned by the page's rotation, fitted into `rect`.
fn paint_thumbnail(
    ui: &egui::Ui,
    rect: egui::Rect,
    texture: Option<&egui::TextureHandle>,
    page: &PageRef,
) {
    let Some(texture) = texture else {
        ui.painter().rect_filled(rect, 2.0, ui.visuals().faint_bg_color);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("Page {}", page.original_index + 1),
            egui::FontId::proportional(14.0),
            ui.visuals().weak_text_color(),
        );
        return;
    };

    let size = texture.size_vec2();
    let quarter_turn = page.rotation % 180 != 0;
    let shown = if quarter_turn { egui::vec2(size.y, size.x) } else { size };
    let scale = (rect.width() / shown.x).min(rect.height() / shown.y).min(1.0);
    let draw_rect = egui::Rect::from_center_size(rect.center(), size * scale);

    egui::Image::new((texture.id(), size))
        .rotate((page.rotation as f32).to_radians(), egui::Vec2::splat(0.5))
        .paint_at(ui, draw_rect);
}

/// Move the dragged card under the pointer; the grid re-lays out next frame.
fn follow_drag(ui: &egui::Ui, state: &mut OrganizeState, origin: egui::Pos2) {
    if state.drag.dragging().is_none() {
        return;
    }
    let (pointer, released) = ui.input(|i| (i.pointer.interact_pos(), !i.pointer.primary_down()));
    if released {
        state.drag.stop();
        return;
    }
    if let Some(pointer) = pointer {
        let relative = pointer - origin;
        if state
            .drag
            .drag_to(&mut state.collection, &state.layout, relative.x, relative.y, state.cell)
        {
            ui.ctx().request_repaint();
        }
    }
}

fn apply(action: CardAction, state: &mut OrganizeState, runner: &JobRunner, feedback: &mut Feedback) {
    match action {
        CardAction::Select(id) => state.selected = Some(id),
        CardAction::Rotate(id) => state.collection.rotate(id, 90),
        CardAction::Remove(id) => state.remove(id),
        CardAction::Preview(id) => {
            if let Some(page) = state.collection.get(id) {
                feedback.submit(runner, JobCommand::RenderPreview { page: page.clone() });
            }
        }
        CardAction::InsertBefore(id) => {
            if let Some(path) = pick_pdf() {
                load(path, Placement::Before(id), runner, feedback);
            }
        }
        CardAction::InsertAfter(id) => {
            if let Some(path) = pick_pdf() {
                load(path, Placement::After(id), runner, feedback);
            }
        }
    }
}

fn show_preview_window(ctx: &egui::Context, state: &mut OrganizeState) {
    let Some(preview) = &state.preview else {
        return;
    };
    let mut open = true;
    let title = format!("Page {} Preview", preview.page.original_index + 1);

    egui::Window::new(title)
        .open(&mut open)
        .default_size([600.0, 800.0])
        .show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                let size = preview.texture.size_vec2();
                let shown = if preview.page.rotation % 180 != 0 {
                    egui::vec2(size.y, size.x)
                } else {
                    size
                };
                let (rect, _) = ui.allocate_exact_size(shown, egui::Sense::hover());
                egui::Image::new((preview.texture.id(), size))
                    .rotate((preview.page.rotation as f32).to_radians(), egui::Vec2::splat(0.5))
                    .paint_at(ui, egui::Rect::from_center_size(rect.center(), size));
            });
        });

    if !open {
        state.preview = None;
    }
}

fn load(path: PathBuf, placement: Placement, runner: &JobRunner, feedback: &mut Feedback) {
    feedback.submit(runner, JobCommand::OrganizeLoad { path, placement });
}

fn pick_pdf() -> Option<PathBuf> {
    rfd::FileDialog::new().add_filter("PDF", &["pdf"]).pick_file()
}

fn short_name(name: &str) -> String {
    if name.chars().count() > 15 {
        let head: String = name.chars().take(12).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}
