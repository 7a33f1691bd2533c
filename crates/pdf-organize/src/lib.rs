//! Page-level PDF organization: range parsing, the organizer's page
//! collection and grid geometry, and the lopdf plumbing that loads, assembles,
//! splits, merges and protects documents.

mod assemble;
mod collection;
pub mod constants;
mod grid;
mod io;
mod merge;
mod protect;
mod range;
mod render;
mod split;
mod types;

pub use assemble::{assemble, assemble_all, page_attribute, page_size};
pub use collection::{CollectionEntry, PageCollection, PageId, PageRef};
pub use grid::{CellSize, DragState, GridCell, GridLayout};
pub use io::{count_pages, load_pdf, load_sources, save_pdf};
pub use merge::{default_merged_filename, merge_documents};
pub use protect::{encrypt, unlock};
pub use range::{PageRange, parse_ranges, selected_pages};
pub use render::{PageRenderer, RenderedPage};
pub use split::{ExtractionOutput, plan_extraction, plan_split_all};
pub use types::*;

#[cfg(feature = "pdfium")]
pub use render::pdfium::{PdfiumRenderer, init_pdfium};
