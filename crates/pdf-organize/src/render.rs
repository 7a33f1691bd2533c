//! Page rasterization
//!
//! Rendering is delegated to an external backend behind [`PageRenderer`].
//! The `pdfium` feature provides one backed by pdfium-render.

use crate::types::*;
use image::{DynamicImage, RgbaImage};
use std::path::Path;

/// An RGBA raster of one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub width: usize,
    pub height: usize,
    pub rgba_data: Vec<u8>,
}

impl RenderedPage {
    pub fn from_image(image: DynamicImage) -> Self {
        let rgba = image.into_rgba8();
        Self {
            width: rgba.width() as usize,
            height: rgba.height() as usize,
            rgba_data: rgba.into_raw(),
        }
    }

    /// Shrink to fit `max_width` x `max_height`, keeping the aspect ratio.
    /// Pages already inside the box are left alone.
    pub fn fit_within(self, max_width: u32, max_height: u32) -> Result<Self> {
        if self.width <= max_width as usize && self.height <= max_height as usize {
            return Ok(self);
        }
        let image = RgbaImage::from_raw(self.width as u32, self.height as u32, self.rgba_data)
            .ok_or_else(|| OrganizeError::Render("bitmap size does not match its data".into()))?;
        Ok(Self::from_image(
            DynamicImage::ImageRgba8(image).thumbnail(max_width, max_height),
        ))
    }
}

/// Rasterizes pages of documents on disk
pub trait PageRenderer: Send + Sync {
    fn page_count(&self, source: &Path) -> Result<usize>;

    fn render(&self, source: &Path, page_index: usize, scale: f32) -> Result<RenderedPage>;

    /// Render every page at `scale`, shrunk into `max_size`, calling
    /// `on_page` once per page in order. A page that fails to render is
    /// reported through `on_page` and does not stop the others.
    fn render_thumbnails(
        &self,
        source: &Path,
        scale: f32,
        max_size: (u32, u32),
        on_page: &mut dyn FnMut(usize, usize, Result<RenderedPage>),
    ) -> Result<()> {
        let total = self.page_count(source)?;
        for index in 0..total {
            let page = self
                .render(source, index, scale)
                .and_then(|page| page.fit_within(max_size.0, max_size.1));
            on_page(index, total, page);
        }
        Ok(())
    }
}

#[cfg(feature = "pdfium")]
pub mod pdfium {
    use super::{PageRenderer, RenderedPage};
    use crate::types::*;
    use pdfium_render::prelude::*;
    use std::path::Path;

    /// Bind pdfium, preferring a vendored copy under `vendor/pdfium/lib`
    /// relative to the working directory over the system library.
    pub fn init_pdfium() -> std::result::Result<Pdfium, PdfiumError> {
        let vendor_path = std::env::current_dir()
            .ok()
            .map(|dir| dir.join("vendor/pdfium/lib"))
            .filter(|path| path.exists());

        if let Some(vendor_path) = vendor_path {
            if let Ok(binding) =
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&vendor_path))
            {
                return Ok(Pdfium::new(binding));
            }
        }

        Pdfium::bind_to_system_library().map(Pdfium::new)
    }

    /// [`PageRenderer`] backed by pdfium. Each call binds its own pdfium
    /// instance, so the renderer is safe to share across jobs.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct PdfiumRenderer;

    impl PdfiumRenderer {
        /// Fails when no pdfium library can be bound.
        pub fn new() -> Result<Self> {
            init_pdfium().map_err(render_error)?;
            Ok(Self)
        }
    }

    impl PageRenderer for PdfiumRenderer {
        fn page_count(&self, source: &Path) -> Result<usize> {
            let pdfium = init_pdfium().map_err(render_error)?;
            let document = pdfium
                .load_pdf_from_file(source, None)
                .map_err(render_error)?;
            Ok(document.pages().len() as usize)
        }

        fn render(&self, source: &Path, page_index: usize, scale: f32) -> Result<RenderedPage> {
            let pdfium = init_pdfium().map_err(render_error)?;
            let document = pdfium
                .load_pdf_from_file(source, None)
                .map_err(render_error)?;
            render_page(&document, page_index, scale)
        }

        fn render_thumbnails(
            &self,
            source: &Path,
            scale: f32,
            max_size: (u32, u32),
            on_page: &mut dyn FnMut(usize, usize, Result<RenderedPage>),
        ) -> Result<()> {
            let pdfium = init_pdfium().map_err(render_error)?;
            let document = pdfium
                .load_pdf_from_file(source, None)
                .map_err(render_error)?;
            let total = document.pages().len() as usize;
            for index in 0..total {
                let page = render_page(&document, index, scale)
                    .and_then(|page| page.fit_within(max_size.0, max_size.1));
                on_page(index, total, page);
            }
            Ok(())
        }
    }

    fn render_page(document: &PdfDocument, page_index: usize, scale: f32) -> Result<RenderedPage> {
        let index = u16::try_from(page_index).map_err(|_| {
            OrganizeError::Render(format!("page index {page_index} is beyond what pdfium can address"))
        })?;
        let page = document.pages().get(index).map_err(render_error)?;
        let config = PdfRenderConfig::new().scale_page_by_factor(scale);
        let bitmap = page.render_with_config(&config).map_err(render_error)?;
        Ok(RenderedPage::from_image(bitmap.as_image()))
    }

    fn render_error(e: PdfiumError) -> OrganizeError {
        OrganizeError::Render(e.to_string())
    }
}
