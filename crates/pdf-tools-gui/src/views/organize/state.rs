use eframe::egui;
use pdf_async_runtime::{LoadedPage, PageRef, Placement, RenderedPage};
use pdf_organize::{CellSize, DragState, GridLayout, PageCollection, PageId};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::ui_components::file_name;

/// A large render of one page, shown in its own window
pub struct Preview {
    pub page: PageRef,
    pub texture: egui::TextureHandle,
}

#[derive(Default)]
pub struct OrganizeState {
    pub collection: PageCollection,
    pub layout: GridLayout,
    pub drag: DragState,
    /// Footprint of one card, re-measured every frame
    pub cell: CellSize,
    pub selected: Option<PageId>,
    pub thumbnails: HashMap<PageId, egui::TextureHandle>,
    pub sources: Vec<PathBuf>,
    pub preview: Option<Preview>,
}

impl OrganizeState {
    /// Put freshly loaded pages where the load was asked to put them.
    pub fn pages_loaded(
        &mut self,
        ctx: &egui::Context,
        placement: Placement,
        source: PathBuf,
        pages: Vec<LoadedPage>,
    ) {
        let (refs, thumbnails): (Vec<PageRef>, Vec<Option<RenderedPage>>) = pages
            .into_iter()
            .map(|loaded| (loaded.page, loaded.thumbnail))
            .unzip();

        let ids = match placement {
            Placement::Replace => {
                self.thumbnails.clear();
                self.sources.clear();
                self.selected = None;
                self.drag.stop();
                self.collection.load(refs)
            }
            Placement::Append => self.collection.append(refs),
            anchored => {
                let index = anchored.insertion_index(&self.collection);
                self.collection.insert_at(index, refs)
            }
        };

        for (id, thumbnail) in ids.into_iter().zip(thumbnails) {
            if let Some(image) = thumbnail {
                let texture = ctx.load_texture(
                    format!("thumb-{id:?}"),
                    color_image(&image),
                    egui::TextureOptions::LINEAR,
                );
                self.thumbnails.insert(id, texture);
            }
        }

        if !self.sources.contains(&source) {
            self.sources.push(source);
        }
    }

    pub fn page_rendered(&mut self, ctx: &egui::Context, page: PageRef, image: RenderedPage) {
        let image = color_image(&image);
        match &mut self.preview {
            Some(preview) => {
                preview.page = page;
                preview.texture.set(image, egui::TextureOptions::LINEAR);
            }
            None => {
                let texture = ctx.load_texture("page-preview", image, egui::TextureOptions::LINEAR);
                self.preview = Some(Preview { page, texture });
            }
        }
    }

    pub fn remove(&mut self, id: PageId) {
        self.collection.remove(id);
        self.thumbnails.remove(&id);
        if self.selected == Some(id) {
            self.selected = None;
        }
    }

    pub fn clear(&mut self) {
        self.collection.clear();
        self.thumbnails.clear();
        self.sources.clear();
        self.selected = None;
        self.drag.stop();
    }

    /// The files the grid currently draws from, for the header
    pub fn source_summary(&self) -> String {
        if self.sources.is_empty() {
            return "(no file loaded)".to_string();
        }
        self.sources
            .iter()
            .map(|path| file_name(path))
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

fn color_image(page: &RenderedPage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied([page.width, page.height], &page.rgba_data)
}
