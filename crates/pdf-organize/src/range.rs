//! Page range expressions
//!
//! A range expression is a comma-separated list of tokens, each one of
//! `N`, `A-B`, `-B` or `A-`, with 1-based inclusive page numbers. Endpoints
//! outside the document are clamped rather than rejected.

use crate::types::{OrganizeError, Result};
use std::collections::BTreeSet;

/// An inclusive, 1-based page interval already clamped to a document.
///
/// Only [`parse_ranges`] builds these, so `1 <= start <= end <= total_pages`
/// always holds for the document the text was parsed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRange {
    start: usize,
    end: usize,
}

impl PageRange {
    /// First page, 1-based
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last page, 1-based and inclusive
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of pages covered
    pub fn page_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Zero-based page indices covered by this range, in order
    pub fn pages(&self) -> std::ops::Range<usize> {
        (self.start - 1)..self.end
    }
}

impl From<PageRange> for (usize, usize) {
    fn from(range: PageRange) -> Self {
        (range.start, range.end)
    }
}

/// Parse a range expression against a document of `total_pages` pages.
///
/// Empty (or all-whitespace) input yields an empty list; whether that means
/// "nothing" or "everything" is up to the caller.
pub fn parse_ranges(text: &str, total_pages: usize) -> Result<Vec<PageRange>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Ok(Vec::new());
    }

    let mut ranges = Vec::new();
    for token in compact.split(',').filter(|t| !t.is_empty()) {
        if total_pages == 0 {
            return Err(OrganizeError::InvalidRange(format!(
                "document has no pages to select with '{token}'"
            )));
        }
        ranges.push(parse_token(token, total_pages)?);
    }
    Ok(ranges)
}

/// Zero-based indices selected by `text`; empty text selects every page.
pub fn selected_pages(text: &str, total_pages: usize) -> Result<BTreeSet<usize>> {
    let ranges = parse_ranges(text, total_pages)?;
    if ranges.is_empty() {
        return Ok((0..total_pages).collect());
    }
    Ok(ranges.iter().flat_map(PageRange::pages).collect())
}

fn parse_token(token: &str, total_pages: usize) -> Result<PageRange> {
    let (start, end) = match token.split_once('-') {
        Some(("", "")) => {
            return Err(OrganizeError::InvalidRange(format!(
                "'{token}' has no page on either side of '-'"
            )));
        }
        Some((left, right)) => {
            let start = if left.is_empty() {
                1
            } else {
                page_number(left, token)?
            };
            let end = if right.is_empty() {
                total_pages
            } else {
                page_number(right, token)?
            };
            (start, end)
        }
        None => {
            let page = page_number(token, token)?;
            (page, page)
        }
    };

    let start = start.clamp(1, total_pages);
    let end = end.clamp(1, total_pages);
    if start > end {
        return Err(OrganizeError::InvalidRange(format!(
            "start page {start} is after end page {end} in '{token}'"
        )));
    }

    Ok(PageRange { start, end })
}

fn page_number(text: &str, token: &str) -> Result<usize> {
    if text.bytes().all(|b| b.is_ascii_digit()) {
        // Digit strings too long for usize are past any document's end
        Ok(text.parse().unwrap_or(usize::MAX))
    } else {
        Err(OrganizeError::InvalidRange(format!(
            "invalid characters in '{token}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_too_long_for_usize_clamp_to_last_page() {
        let ranges = parse_ranges("3-99999999999999999999999", 7).unwrap();
        assert_eq!(ranges.len(), 1);
        assert_eq!((ranges[0].start(), ranges[0].end()), (3, 7));
    }

    #[test]
    fn zero_clamps_up_to_first_page() {
        let ranges = parse_ranges("0", 4).unwrap();
        assert_eq!((ranges[0].start(), ranges[0].end()), (1, 1));
    }
}
