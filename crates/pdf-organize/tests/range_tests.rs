use pdf_organize::*;

fn pairs(text: &str, total: usize) -> Vec<(usize, usize)> {
    parse_ranges(text, total)
        .unwrap()
        .into_iter()
        .map(Into::into)
        .collect()
}

#[test]
fn test_single_pages_and_intervals() {
    assert_eq!(pairs("1-3,5", 10), vec![(1, 3), (5, 5)]);
}

#[test]
fn test_empty_input_is_empty() {
    assert!(parse_ranges("", 10).unwrap().is_empty());
    assert!(parse_ranges("   ", 10).unwrap().is_empty());
}

#[test]
fn test_whitespace_is_ignored() {
    assert_eq!(pairs(" 1 - 3 , 5 ", 10), vec![(1, 3), (5, 5)]);
}

#[test]
fn test_open_ended_ranges() {
    assert_eq!(pairs("-4", 10), vec![(1, 4)]);
    assert_eq!(pairs("7-", 10), vec![(7, 10)]);
}

#[test]
fn test_out_of_range_is_clamped() {
    assert_eq!(pairs("1-100", 10), vec![(1, 10)]);
    assert_eq!(pairs("50", 10), vec![(10, 10)]);
}

#[test]
fn test_bare_dash_is_rejected() {
    assert!(matches!(
        parse_ranges("-", 10),
        Err(OrganizeError::InvalidRange(_))
    ));
}

#[test]
fn test_reversed_range_is_rejected() {
    assert!(matches!(
        parse_ranges("5-2", 10),
        Err(OrganizeError::InvalidRange(_))
    ));
}

#[test]
fn test_reversed_after_clamping_is_rejected() {
    // 20 clamps to 10, still after 3
    assert!(parse_ranges("20-3", 10).is_err());
}

#[test]
fn test_non_numeric_is_rejected() {
    assert!(parse_ranges("a", 10).is_err());
    assert!(parse_ranges("1-b", 10).is_err());
    assert!(parse_ranges("1,2x", 10).is_err());
}

#[test]
fn test_empty_tokens_are_skipped() {
    assert_eq!(pairs("1,,3,", 10), vec![(1, 1), (3, 3)]);
}

#[test]
fn test_empty_document_rejects_selection() {
    assert!(parse_ranges("1", 0).is_err());
    assert!(parse_ranges("", 0).unwrap().is_empty());
}

#[test]
fn test_page_range_accessors() {
    let range = parse_ranges("3-5", 10).unwrap()[0];
    assert_eq!(range.start(), 3);
    assert_eq!(range.end(), 5);
    assert_eq!(range.page_count(), 3);
    assert_eq!(range.pages().collect::<Vec<_>>(), vec![2, 3, 4]);
}

#[test]
fn test_selected_pages_defaults_to_all() {
    let all = selected_pages("", 4).unwrap();
    assert_eq!(all.into_iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
}

#[test]
fn test_selected_pages_merges_overlaps() {
    let pages = selected_pages("1-3,2-4,9", 10).unwrap();
    assert_eq!(pages.into_iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 8]);
}
