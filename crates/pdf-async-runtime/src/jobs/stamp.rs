use super::file_name;
use crate::channel::ProgressSender;
use crate::error::{JobError, Result};
use pdf_organize::{OrganizeError, load_pdf, save_pdf, selected_pages};
use pdf_stamp::{PageNumberOptions, Watermark, WatermarkSpec, number_pages, watermark_document};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub(super) async fn watermark(
    input: PathBuf,
    output: PathBuf,
    spec: WatermarkSpec,
    ranges: String,
    events: &ProgressSender,
) -> Result<String> {
    let watermark = Arc::new(load_watermark(spec).await?);
    let progress = events.clone();
    watermark_file(&input, &output, &ranges, watermark, move |done, total| {
        progress.progress_of(done, total, 100);
        progress.status(format!("Processing page {done}/{total}"));
    })
    .await?;

    Ok(format!(
        "Watermark applied successfully! Output saved to: {}",
        output.display()
    ))
}

/// Watermark every PDF directly inside `input_dir`. A file that cannot be
/// read or written, or that has no page in `ranges`, is logged and skipped.
/// The range syntax itself is checked before the job starts.
pub(super) async fn watermark_folder(
    input_dir: PathBuf,
    output_dir: PathBuf,
    spec: WatermarkSpec,
    ranges: String,
    events: &ProgressSender,
) -> Result<String> {
    let files = pdf_files_in(&input_dir).await?;
    if files.is_empty() {
        return Err(JobError::Config(format!(
            "No PDF files found in {}",
            input_dir.display()
        )));
    }
    let watermark = Arc::new(load_watermark(spec).await?);

    let total = files.len();
    let mut written = 0;
    for (idx, path) in files.iter().enumerate() {
        let output = output_dir.join(file_name(path));
        match watermark_file(path, &output, &ranges, Arc::clone(&watermark), |_, _| {}).await {
            Ok(()) => written += 1,
            Err(e) => log::warn!("Skipping {}: {e}", path.display()),
        }
        events.progress_of(idx + 1, total, 100);
        events.status(format!("Processed {}/{total}", idx + 1));
    }

    let skipped = total - written;
    Ok(if skipped == 0 {
        format!(
            "Batch watermark complete! {total} files saved to: {}",
            output_dir.display()
        )
    } else {
        format!(
            "Batch watermark complete! {written} of {total} files saved to: {} ({skipped} skipped, see log)",
            output_dir.display()
        )
    })
}

pub(super) async fn number(
    input: PathBuf,
    output: PathBuf,
    options: PageNumberOptions,
    events: &ProgressSender,
) -> Result<String> {
    let mut doc = load_pdf(&input, None).await?;
    let progress = events.clone();
    let doc = tokio::task::spawn_blocking(move || {
        number_pages(&mut doc, &options, |done, total| {
            progress.progress_of(done, total, 100);
            progress.status(format!("Numbering page {done}/{total}"));
        })?;
        Ok::<_, JobError>(doc)
    })
    .await??;
    save_pdf(doc, &output).await?;

    Ok(format!(
        "Page numbering complete! Output saved to: {}",
        output.display()
    ))
}

/// Validate the watermark and decode its image off the async threads.
async fn load_watermark(spec: WatermarkSpec) -> Result<Watermark> {
    Ok(tokio::task::spawn_blocking(move || Watermark::load(&spec)).await??)
}

async fn watermark_file(
    input: &Path,
    output: &Path,
    ranges: &str,
    watermark: Arc<Watermark>,
    on_page: impl FnMut(usize, usize) + Send + 'static,
) -> Result<()> {
    let mut doc = load_pdf(input, None).await?;
    let pages = selected_pages(ranges, doc.get_pages().len())?;
    let doc = tokio::task::spawn_blocking(move || {
        watermark_document(&mut doc, &watermark, &pages, on_page)?;
        Ok::<_, JobError>(doc)
    })
    .await??;
    save_pdf(doc, output).await?;
    Ok(())
}

/// `*.pdf` files (any case) directly inside `dir`, sorted by name
async fn pdf_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(OrganizeError::from)?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(OrganizeError::from)? {
        let path = entry.path();
        let is_pdf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
