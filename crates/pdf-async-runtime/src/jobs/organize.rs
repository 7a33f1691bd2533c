use super::file_name;
use crate::channel::ProgressSender;
use crate::error::{JobError, Result};
use crate::update::{LoadedPage, Placement, ProgressEvent};
use pdf_organize::constants::{PREVIEW_RENDER_SCALE, THUMBNAIL_MAX_SIZE, THUMBNAIL_RENDER_SCALE};
use pdf_organize::{PageRef, PageRenderer, assemble, load_pdf, load_sources, save_pdf};
use std::path::PathBuf;
use std::sync::Arc;

pub(super) async fn load(
    path: PathBuf,
    placement: Placement,
    events: &ProgressSender,
    renderer: Option<Arc<dyn PageRenderer>>,
) -> Result<String> {
    let name = file_name(&path);
    events.status(format!("Loading {name}..."));

    let pages = match renderer {
        Some(renderer) => render_thumbnails(path.clone(), renderer, events.clone()).await?,
        None => {
            let doc = load_pdf(&path, None).await?;
            events.progress(50);
            PageRef::all_pages(&path, doc.get_pages().len())
                .into_iter()
                .map(|page| LoadedPage {
                    page,
                    thumbnail: None,
                })
                .collect()
        }
    };

    events.status("Populating grid...");
    let count = pages.len();
    events.send(ProgressEvent::PagesLoaded {
        placement,
        source: path,
        pages,
    });
    Ok(format!("Loaded {count} pages from {name}"))
}

/// Render every page of `path` on the blocking pool. A page that fails to
/// render is kept without a thumbnail.
async fn render_thumbnails(
    path: PathBuf,
    renderer: Arc<dyn PageRenderer>,
    events: ProgressSender,
) -> Result<Vec<LoadedPage>> {
    tokio::task::spawn_blocking(move || {
        let name = file_name(&path);
        let mut pages = Vec::new();
        renderer.render_thumbnails(
            &path,
            THUMBNAIL_RENDER_SCALE,
            THUMBNAIL_MAX_SIZE,
            &mut |index, total, rendered| {
                let thumbnail = match rendered {
                    Ok(image) => Some(image),
                    Err(e) => {
                        log::warn!("No thumbnail for page {} of {name}: {e}", index + 1);
                        None
                    }
                };
                pages.push(LoadedPage {
                    page: PageRef::new(&path, index),
                    thumbnail,
                });
                events.progress_of(index + 1, total, 50);
                events.status(format!("Rendering {}/{total} from {name}", index + 1));
            },
        )?;
        Ok::<_, JobError>(pages)
    })
    .await?
}

pub(super) async fn save(
    pages: Vec<PageRef>,
    output: PathBuf,
    events: &ProgressSender,
) -> Result<String> {
    let total = pages.len();
    events.status("Reading source files...");
    let sources = load_sources(pages.iter().map(PageRef::source)).await?;
    events.progress(30);

    events.status(format!("Assembling {total} pages..."));
    let doc = tokio::task::spawn_blocking(move || assemble(&sources, &pages)).await??;
    events.progress(70);

    events.status(format!("Writing {}...", file_name(&output)));
    save_pdf(doc, &output).await?;
    events.progress(100);

    Ok(format!("Saved organized PDF to: {}", output.display()))
}

pub(super) async fn preview(
    page: PageRef,
    events: &ProgressSender,
    renderer: Option<Arc<dyn PageRenderer>>,
) -> Result<String> {
    let renderer = renderer
        .ok_or_else(|| JobError::Config("Page rendering is not available".to_string()))?;

    let source = page.source.clone();
    let index = page.original_index;
    let image = tokio::task::spawn_blocking(move || {
        renderer.render(&source, index, PREVIEW_RENDER_SCALE)
    })
    .await??;

    let message = format!("Page {} of {}", index + 1, file_name(page.source()));
    events.send(ProgressEvent::PageRendered { page, image });
    Ok(message)
}
