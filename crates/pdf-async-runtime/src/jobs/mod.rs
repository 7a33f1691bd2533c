//! Job bodies
//!
//! Each job reports progress through its [`ProgressSender`] and returns the
//! message for its `Done` event. The runner sends the terminal event.

mod documents;
mod organize;
mod protect;
mod stamp;

use crate::channel::ProgressSender;
use crate::command::JobCommand;
use crate::error::Result;
use pdf_organize::PageRenderer;
use std::path::Path;
use std::sync::Arc;

pub(crate) async fn run(
    command: JobCommand,
    events: ProgressSender,
    renderer: Option<Arc<dyn PageRenderer>>,
) -> Result<String> {
    match command {
        JobCommand::OrganizeLoad { path, placement } => {
            organize::load(path, placement, &events, renderer).await
        }
        JobCommand::OrganizeSave { pages, output } => organize::save(pages, output, &events).await,
        JobCommand::RenderPreview { page } => organize::preview(page, &events, renderer).await,
        JobCommand::Merge { inputs, output } => documents::merge(inputs, output, &events).await,
        JobCommand::Extract {
            input,
            ranges,
            output_dir,
        } => documents::extract(input, ranges, output_dir, &events).await,
        JobCommand::SplitAll { input, output_dir } => {
            documents::split_all(input, output_dir, &events).await
        }
        JobCommand::Watermark {
            input,
            output,
            spec,
            ranges,
        } => stamp::watermark(input, output, spec, ranges, &events).await,
        JobCommand::WatermarkFolder {
            input_dir,
            output_dir,
            spec,
            ranges,
        } => stamp::watermark_folder(input_dir, output_dir, spec, ranges, &events).await,
        JobCommand::NumberPages {
            input,
            output,
            options,
        } => stamp::number(input, output, options, &events).await,
        JobCommand::Protect {
            input,
            output,
            user_password,
            owner_password,
        } => protect::protect(input, output, user_password, owner_password, &events).await,
        JobCommand::Unlock {
            input,
            output,
            password,
        } => protect::unlock(input, output, password, &events).await,
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
