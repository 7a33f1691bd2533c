//! Planning split and extract outputs
//!
//! Plans are computed up front so a bad range expression is reported before
//! any file is written.

use crate::range::parse_ranges;
use crate::types::*;
use std::path::Path;

/// One file to write: its name and the zero-based pages it holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOutput {
    pub file_name: String,
    pub pages: Vec<usize>,
}

/// One output per comma-separated token of `ranges_text`.
///
/// `"1-3, 7"` on `report.pdf` plans `report_1_3.pdf` and `report_7.pdf`.
pub fn plan_extraction(
    source: &Path,
    ranges_text: &str,
    total_pages: usize,
) -> Result<Vec<ExtractionOutput>> {
    let base = base_name(source);
    let mut outputs = Vec::new();

    for token in ranges_text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let pages: Vec<usize> = parse_ranges(token, total_pages)?
            .iter()
            .flat_map(|range| range.pages())
            .collect();
        if pages.is_empty() {
            continue;
        }
        let label = token.replace(' ', "").replace('-', "_");
        outputs.push(ExtractionOutput {
            file_name: format!("{base}_{label}.pdf"),
            pages,
        });
    }

    Ok(outputs)
}

/// One single-page output per page: `report_page_1.pdf`, ...
pub fn plan_split_all(source: &Path, total_pages: usize) -> Vec<ExtractionOutput> {
    let base = base_name(source);
    (0..total_pages)
        .map(|index| ExtractionOutput {
            file_name: format!("{base}_page_{}.pdf", index + 1),
            pages: vec![index],
        })
        .collect()
}

fn base_name(source: &Path) -> String {
    source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}
