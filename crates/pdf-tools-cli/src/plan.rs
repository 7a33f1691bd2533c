//! Page plans for `pdft organize`
//!
//! Each item is `FILE[:RANGES][@DEGREES]`, e.g. `scan.pdf:3,1-2@90`. Pages
//! are taken in the order the ranges list them; no ranges means every page.

use anyhow::{Context, Result, bail};
use pdf_organize::{PageCollection, PageRef, count_pages, parse_ranges};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct PlanItem {
    pub path: PathBuf,
    pub ranges: String,
    pub rotation: i32,
}

pub fn parse_item(item: &str) -> Result<PlanItem> {
    // `@` only starts a rotation when an integer follows, so it may appear
    // in file names
    let (rest, rotation) = match item
        .rsplit_once('@')
        .and_then(|(rest, degrees)| Some((rest, degrees.trim().parse::<i32>().ok()?)))
    {
        Some((rest, degrees)) => {
            if degrees % 90 != 0 {
                bail!("Rotation must be a multiple of 90 in '{item}'");
            }
            (rest, degrees)
        }
        None => (item, 0),
    };

    // A colon only starts a range list when only range characters follow,
    // so drive letters survive
    let (path, ranges) = match rest.rsplit_once(':') {
        Some((path, ranges))
            if !path.is_empty()
                && !ranges.is_empty()
                && ranges.chars().all(|c| c.is_ascii_digit() || "-, ".contains(c)) =>
        {
            (path, ranges)
        }
        _ => (rest, ""),
    };

    if path.is_empty() {
        bail!("Missing file name in '{item}'");
    }

    Ok(PlanItem {
        path: PathBuf::from(path),
        ranges: ranges.to_string(),
        rotation,
    })
}

/// Resolve every item against its file's page count, in order.
pub fn build_collection(items: &[PlanItem]) -> Result<PageCollection> {
    let mut collection = PageCollection::new();
    for item in items {
        let total = count_pages(&item.path)
            .with_context(|| format!("Failed to read {}", item.path.display()))?;
        let ranges = parse_ranges(&item.ranges, total)?;
        let pages: Vec<PageRef> = if ranges.is_empty() {
            PageRef::all_pages(&item.path, total)
        } else {
            ranges
                .iter()
                .flat_map(|range| range.pages())
                .map(|index| PageRef::new(&item.path, index))
                .collect()
        };
        collection.append(
            pages
                .into_iter()
                .map(|page| page.with_rotation(item.rotation)),
        );
    }
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_file() {
        let item = parse_item("a.pdf").unwrap();
        assert_eq!(item.path, PathBuf::from("a.pdf"));
        assert_eq!(item.ranges, "");
        assert_eq!(item.rotation, 0);
    }

    #[test]
    fn test_ranges_and_rotation() {
        let item = parse_item("scan.pdf:3,1-2@-90").unwrap();
        assert_eq!(item.path, PathBuf::from("scan.pdf"));
        assert_eq!(item.ranges, "3,1-2");
        assert_eq!(item.rotation, -90);
    }

    #[test]
    fn test_drive_letter_is_part_of_path() {
        let item = parse_item(r"C:\docs\a.pdf:2").unwrap();
        assert_eq!(item.path, PathBuf::from(r"C:\docs\a.pdf"));
        assert_eq!(item.ranges, "2");
    }

    #[test]
    fn test_bad_rotation() {
        assert!(parse_item("a.pdf@45").is_err());
        assert!(parse_item("@90").is_err());
    }

    #[test]
    fn test_at_sign_in_file_name() {
        let item = parse_item("me@work.pdf").unwrap();
        assert_eq!(item.path, PathBuf::from("me@work.pdf"));
        assert_eq!(item.rotation, 0);

        let item = parse_item("me@work.pdf:2-3@180").unwrap();
        assert_eq!(item.path, PathBuf::from("me@work.pdf"));
        assert_eq!(item.ranges, "2-3");
        assert_eq!(item.rotation, 180);
    }
}
