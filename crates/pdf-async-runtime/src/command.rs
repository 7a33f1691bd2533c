use crate::update::Placement;
use pdf_organize::{PageRef, count_pages, parse_ranges, plan_extraction};
use pdf_stamp::{PageNumberOptions, WatermarkSpec};
use std::path::{Path, PathBuf};

/// Jobs that share a slot: at most one job of each kind runs at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobKind {
    Organize,
    Preview,
    Merge,
    Split,
    Watermark,
    Protect,
}

/// Commands sent from a front end to the job runner
#[derive(Debug, Clone)]
pub enum JobCommand {
    /// Read a document's pages (rendering thumbnails when a renderer is set)
    OrganizeLoad {
        path: PathBuf,
        placement: Placement,
    },
    /// Write the given pages, in order, to `output`
    OrganizeSave {
        pages: Vec<PageRef>,
        output: PathBuf,
    },
    /// Render one page at full scale
    RenderPreview {
        page: PageRef,
    },
    Merge {
        inputs: Vec<PathBuf>,
        output: PathBuf,
    },
    /// One output file per comma-separated token of `ranges`
    Extract {
        input: PathBuf,
        ranges: String,
        output_dir: PathBuf,
    },
    /// One output file per page
    SplitAll {
        input: PathBuf,
        output_dir: PathBuf,
    },
    /// Watermark the pages selected by `ranges` (empty selects all)
    Watermark {
        input: PathBuf,
        output: PathBuf,
        spec: WatermarkSpec,
        ranges: String,
    },
    /// Watermark every PDF in `input_dir` into `output_dir`
    WatermarkFolder {
        input_dir: PathBuf,
        output_dir: PathBuf,
        spec: WatermarkSpec,
        ranges: String,
    },
    NumberPages {
        input: PathBuf,
        output: PathBuf,
        options: PageNumberOptions,
    },
    Protect {
        input: PathBuf,
        output: PathBuf,
        user_password: String,
        owner_password: String,
    },
    Unlock {
        input: PathBuf,
        output: PathBuf,
        password: String,
    },
}

impl JobCommand {
    pub fn kind(&self) -> JobKind {
        match self {
            JobCommand::OrganizeLoad { .. } | JobCommand::OrganizeSave { .. } => JobKind::Organize,
            JobCommand::RenderPreview { .. } => JobKind::Preview,
            JobCommand::Merge { .. } => JobKind::Merge,
            JobCommand::Extract { .. } | JobCommand::SplitAll { .. } => JobKind::Split,
            JobCommand::Watermark { .. }
            | JobCommand::WatermarkFolder { .. }
            | JobCommand::NumberPages { .. } => JobKind::Watermark,
            JobCommand::Protect { .. } | JobCommand::Unlock { .. } => JobKind::Protect,
        }
    }

    /// Checks that can fail before any work starts. Range text is checked
    /// against the input's real page count, so this may read the input.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            JobCommand::OrganizeLoad { path, .. } => require_file(path),
            JobCommand::OrganizeSave { pages, .. } => {
                if pages.is_empty() {
                    return Err("No pages to save".to_string());
                }
                Ok(())
            }
            JobCommand::RenderPreview { page } => require_file(page.source()),
            JobCommand::Merge { inputs, .. } => {
                if inputs.is_empty() {
                    return Err("Add at least one PDF to merge".to_string());
                }
                inputs.iter().try_for_each(|p| require_file(p))
            }
            JobCommand::Extract { input, ranges, .. } => {
                require_file(input)?;
                if ranges.trim().is_empty() {
                    return Err("Enter the page ranges to extract".to_string());
                }
                let total = count_pages(input).map_err(|e| e.to_string())?;
                let plan = plan_extraction(input, ranges, total).map_err(|e| e.to_string())?;
                if plan.is_empty() {
                    return Err("The ranges select no pages".to_string());
                }
                Ok(())
            }
            JobCommand::SplitAll { input, .. } => require_file(input),
            JobCommand::Watermark {
                input,
                spec,
                ranges,
                ..
            } => {
                require_file(input)?;
                spec.validate().map_err(|e| e.to_string())?;
                let total = count_pages(input).map_err(|e| e.to_string())?;
                parse_ranges(ranges, total).map_err(|e| e.to_string())?;
                Ok(())
            }
            JobCommand::WatermarkFolder {
                input_dir,
                spec,
                ranges,
                ..
            } => {
                if !input_dir.is_dir() {
                    return Err(format!("Not a folder: {}", input_dir.display()));
                }
                spec.validate().map_err(|e| e.to_string())?;
                // Page counts differ per file; check the syntax only
                parse_ranges(ranges, usize::MAX).map_err(|e| e.to_string())?;
                Ok(())
            }
            JobCommand::NumberPages { input, options, .. } => {
                require_file(input)?;
                options.validate().map_err(|e| e.to_string())
            }
            JobCommand::Protect {
                input,
                user_password,
                owner_password,
                ..
            } => {
                require_file(input)?;
                if user_password.is_empty() && owner_password.is_empty() {
                    return Err("Enter at least one password (user or owner)".to_string());
                }
                Ok(())
            }
            JobCommand::Unlock {
                input, password, ..
            } => {
                require_file(input)?;
                if password.is_empty() {
                    return Err("Provide the owner password to remove protection".to_string());
                }
                Ok(())
            }
        }
    }
}

fn require_file(path: &Path) -> Result<(), String> {
    if path.is_file() {
        Ok(())
    } else {
        Err(format!("File not found: {}", path.display()))
    }
}
