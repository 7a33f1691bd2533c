#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use eframe::egui;

mod app;
mod feedback;
mod logger;
mod ui_components;
mod views;

use logger::AppLogger;

const LOG_CAPACITY: usize = 1000;

fn main() -> anyhow::Result<()> {
    let logger = AppLogger::new(LOG_CAPACITY)
        .init()
        .context("Failed to install the logger")?;

    // Owns the worker threads every job runs on; dropped after the window closes.
    let runtime = tokio::runtime::Runtime::new().context("Failed to start the tokio runtime")?;
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("PDF Tools")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    log::info!("Starting PDF Tools {}", env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        "PDF Tools",
        options,
        Box::new(move |cc| Ok(Box::new(app::PdfToolsApp::new(cc, handle, logger)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    drop(runtime);
    Ok(())
}
