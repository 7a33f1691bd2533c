use super::file_name;
use crate::channel::ProgressSender;
use crate::error::Result;
use lopdf::Document;
use pdf_organize::{
    ExtractionOutput, PageRef, assemble, load_pdf, merge_documents, plan_extraction,
    plan_split_all, save_pdf,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub(super) async fn merge(
    inputs: Vec<PathBuf>,
    output: PathBuf,
    events: &ProgressSender,
) -> Result<String> {
    let total = inputs.len();
    let mut docs = Vec::with_capacity(total);
    for (idx, path) in inputs.into_iter().enumerate() {
        let doc = load_pdf(&path, None).await?;
        docs.push((path, doc));
        events.progress_of(idx + 1, total, 90);
        events.status(format!("Merging: {}/{total}", idx + 1));
    }

    let merged = tokio::task::spawn_blocking(move || merge_documents(docs)).await??;
    save_pdf(merged, &output).await?;
    events.progress(100);

    Ok(format!("Merge complete! Output saved to: {}", output.display()))
}

pub(super) async fn extract(
    input: PathBuf,
    ranges: String,
    output_dir: PathBuf,
    events: &ProgressSender,
) -> Result<String> {
    let doc = load_pdf(&input, None).await?;
    let plan = plan_extraction(&input, &ranges, doc.get_pages().len())?;
    let written = write_outputs(input, doc, plan, &output_dir, events).await?;
    Ok(format!(
        "Split complete! {written} files saved to {}.",
        output_dir.display()
    ))
}

pub(super) async fn split_all(
    input: PathBuf,
    output_dir: PathBuf,
    events: &ProgressSender,
) -> Result<String> {
    let doc = load_pdf(&input, None).await?;
    let plan = plan_split_all(&input, doc.get_pages().len());
    let written = write_outputs(input, doc, plan, &output_dir, events).await?;
    Ok(format!(
        "Split complete! {written} pages saved to {}.",
        output_dir.display()
    ))
}

/// Assemble and write each planned output in turn; returns how many were
/// written.
async fn write_outputs(
    input: PathBuf,
    doc: Document,
    plan: Vec<ExtractionOutput>,
    output_dir: &Path,
    events: &ProgressSender,
) -> Result<usize> {
    let mut sources = HashMap::new();
    sources.insert(input.clone(), doc);
    let sources = Arc::new(sources);

    let total = plan.len();
    for (idx, output) in plan.into_iter().enumerate() {
        let out_path = output_dir.join(&output.file_name);
        events.progress_of(idx, total, 100);
        events.status(format!(
            "Writing split file {}/{total}: {}",
            idx + 1,
            file_name(&out_path)
        ));

        let pages: Vec<PageRef> = output
            .pages
            .iter()
            .map(|&index| PageRef::new(&input, index))
            .collect();
        let sources = Arc::clone(&sources);
        let part = tokio::task::spawn_blocking(move || assemble(&sources, &pages)).await??;
        save_pdf(part, &out_path).await?;
    }
    events.progress(100);

    Ok(total)
}
