use eframe::egui;
use pdf_async_runtime::{
    JobCommand, JobRunner, Placement, ProgressEvent, ProgressReceiver, progress_channel,
};

use crate::feedback::{Feedback, NoticeKind};
use crate::logger::AppLogger;
use crate::views::{
    MergeState, OrganizeState, ProtectState, SplitState, WatermarkState, show_about, show_log,
    show_merge, show_organize, show_protect, show_split, show_watermark,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Mode {
    #[default]
    Organize,
    Merge,
    Split,
    Watermark,
    Protect,
    About,
}

pub struct PdfToolsApp {
    mode: Mode,
    feedback: Feedback,
    show_log: bool,
    logger: AppLogger,

    runner: JobRunner,
    events: ProgressReceiver,

    organize: OrganizeState,
    merge: MergeState,
    split: SplitState,
    watermark: WatermarkState,
    protect: ProtectState,
}

impl PdfToolsApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (events_tx, events) = progress_channel();
        let runner = with_renderer(JobRunner::new(tokio_handle, events_tx));

        Self {
            mode: Mode::default(),
            feedback: Feedback::default(),
            show_log: false,
            logger,
            runner,
            events,
            organize: OrganizeState::default(),
            merge: MergeState::default(),
            split: SplitState::default(),
            watermark: WatermarkState::default(),
            protect: ProtectState::default(),
        }
    }

    /// Apply every event queued since the last frame, oldest first.
    fn drain_events(&mut self, ctx: &egui::Context) {
        let events = self.events.drain();
        if events.is_empty() {
            return;
        }
        for event in events {
            match self.feedback.apply(event) {
                Some(ProgressEvent::PagesLoaded {
                    placement,
                    source,
                    pages,
                }) => self.organize.pages_loaded(ctx, placement, source, pages),
                Some(ProgressEvent::PageRendered { page, image }) => {
                    self.organize.page_rendered(ctx, page, image)
                }
                _ => {}
            }
        }
        ctx.request_repaint();
    }

    /// PDFs dropped on the window open in the organizer; with pages already
    /// loaded they are appended.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<_> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .filter(|path| {
                    path.extension()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
                })
                .collect()
        });

        for path in dropped {
            match self.mode {
                Mode::Merge => self.merge.files.push(path),
                _ => {
                    self.mode = Mode::Organize;
                    let placement = if self.organize.collection.is_empty() {
                        Placement::Replace
                    } else {
                        Placement::Append
                    };
                    self.feedback.submit(
                        &self.runner,
                        JobCommand::OrganizeLoad { path, placement },
                    );
                }
            }
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.feedback.notice else {
            return;
        };
        let (title, color) = match notice.kind {
            NoticeKind::Success => ("Success", ctx.style().visuals.text_color()),
            NoticeKind::Failure => ("Error", ctx.style().visuals.error_fg_color),
        };
        let mut dismissed = false;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.colored_label(color, &notice.message);
                ui.add_space(8.0);
                dismissed = ui.button("OK").clicked();
            });

        if dismissed {
            self.feedback.dismiss();
        }
    }
}

#[cfg(feature = "pdf-viewer")]
fn with_renderer(runner: JobRunner) -> JobRunner {
    match pdf_organize::PdfiumRenderer::new() {
        Ok(renderer) => runner.with_renderer(std::sync::Arc::new(renderer)),
        Err(e) => {
            log::warn!("Thumbnails disabled: {e}");
            runner
        }
    }
}

#[cfg(not(feature = "pdf-viewer"))]
fn with_renderer(runner: JobRunner) -> JobRunner {
    log::info!("Built without pdf-viewer; thumbnails disabled");
    runner
}

impl eframe::App for PdfToolsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.drain_events(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.mode, Mode::Organize, "🗂 Organize");
                ui.selectable_value(&mut self.mode, Mode::Merge, "🔗 Merge");
                ui.selectable_value(&mut self.mode, Mode::Split, "✂ Split");
                ui.selectable_value(&mut self.mode, Mode::Watermark, "💧 Watermark");
                ui.selectable_value(&mut self.mode, Mode::Protect, "🔒 Protect");
                ui.selectable_value(&mut self.mode, Mode::About, "ℹ About");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.toggle_value(&mut self.show_log, "📜 Log");
                });
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::ProgressBar::new(self.feedback.progress)
                        .desired_width(200.0)
                        .show_percentage(),
                );
                ui.label(&self.feedback.status);
            });
        });

        if self.show_log {
            egui::TopBottomPanel::bottom("log")
                .resizable(true)
                .default_height(160.0)
                .show(ctx, |ui| show_log(ui, &self.logger));
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.mode {
            Mode::Organize => show_organize(ui, &mut self.organize, &self.runner, &mut self.feedback),
            Mode::Merge => show_merge(ui, &mut self.merge, &self.runner, &mut self.feedback),
            Mode::Split => show_split(ui, &mut self.split, &self.runner, &mut self.feedback),
            Mode::Watermark => {
                show_watermark(ui, &mut self.watermark, &self.runner, &mut self.feedback)
            }
            Mode::Protect => show_protect(ui, &mut self.protect, &self.runner, &mut self.feedback),
            Mode::About => show_about(ui, self.runner.has_renderer()),
        });

        self.show_notice(ctx);

        // Jobs report through the channel, not through egui; keep polling
        // while any of them may still be sending.
        if self.feedback.progress > 0.0 || self.organize.drag.dragging().is_some() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
