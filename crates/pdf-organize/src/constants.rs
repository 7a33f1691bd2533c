//! Shared constants for the organizer and page assembly.

// =============================================================================
// Thumbnails
// =============================================================================

/// Scale factor applied when rasterizing a page for its thumbnail
pub const THUMBNAIL_RENDER_SCALE: f32 = 0.3;

/// Bounding box a thumbnail is shrunk into, aspect ratio preserved
pub const THUMBNAIL_MAX_SIZE: (u32, u32) = (150, 200);

/// Scale used for the enlarged single-page preview
pub const PREVIEW_RENDER_SCALE: f32 = 1.0;

// =============================================================================
// Grid
// =============================================================================

/// Number of thumbnail columns in the organizer grid
pub const GRID_COLUMNS: usize = 5;

/// Cell footprint used while the first card has not been measured yet
pub const FALLBACK_CELL_SIZE: (f32, f32) = (170.0, 250.0);

/// Measured cell dimensions below this are treated as unmeasured
pub const MIN_MEASURED_CELL: f32 = 50.0;

/// Spacing added around each card when deriving the cell footprint
pub const CELL_SPACING: f32 = 10.0;

// =============================================================================
// Page Geometry
// =============================================================================

/// Default page dimensions (US Letter) for pages without a usable MediaBox
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (612.0, 792.0);
