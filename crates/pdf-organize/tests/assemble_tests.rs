mod common;

use common::{create_test_pdf, page_markers, page_rotations, write_test_pdf};
use lopdf::Document;
use pdf_organize::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn sources(entries: &[(&str, usize, &str)]) -> HashMap<PathBuf, Document> {
    entries
        .iter()
        .map(|(path, pages, label)| (PathBuf::from(path), create_test_pdf(*pages, label)))
        .collect()
}

#[tokio::test]
async fn test_organize_end_to_end() {
    let dir = TempDir::new().unwrap();
    let first = write_test_pdf(dir.path(), "first.pdf", 3, "S1");
    let second = write_test_pdf(dir.path(), "second.pdf", 2, "S2");

    let mut collection = PageCollection::new();
    let ids = collection.load(PageRef::all_pages(&first, 3));
    collection.append(PageRef::all_pages(&second, 2));
    collection.remove(ids[0]);

    let snapshot = collection.snapshot();
    let loaded = load_sources(snapshot.iter().map(PageRef::source))
        .await
        .unwrap();
    let output = assemble(&loaded, &snapshot).unwrap();

    let out_path = dir.path().join("organized.pdf");
    save_pdf(output, &out_path).await.unwrap();

    let reloaded = load_pdf(&out_path, None).await.unwrap();
    assert_eq!(
        page_markers(&reloaded),
        vec!["S1-P2", "S1-P3", "S2-P1", "S2-P2"]
    );
}

#[test]
fn test_rotation_is_written() {
    let docs = sources(&[("a.pdf", 2, "A")]);
    let pages = vec![
        PageRef::new("a.pdf", 0).with_rotation(90),
        PageRef::new("a.pdf", 1),
        PageRef::new("a.pdf", 0).with_rotation(-90),
    ];

    let output = assemble(&docs, &pages).unwrap();
    assert_eq!(page_markers(&output), vec!["A-P1", "A-P2", "A-P1"]);
    assert_eq!(page_rotations(&output), vec![90, 0, 270]);
}

#[test]
fn test_extra_rotation_adds_to_existing() {
    let mut doc = create_test_pdf(1, "A");
    let page_id = *doc.get_pages().values().next().unwrap();
    doc.get_dictionary_mut(page_id)
        .unwrap()
        .set("Rotate", lopdf::Object::Integer(270));

    let mut docs = HashMap::new();
    docs.insert(PathBuf::from("a.pdf"), doc);

    let output = assemble(&docs, &[PageRef::new("a.pdf", 0).with_rotation(180)]).unwrap();
    assert_eq!(page_rotations(&output), vec![90]);
}

#[test]
fn test_inherited_attributes_are_carried() {
    let docs = sources(&[("a.pdf", 1, "A")]);
    let output = assemble(&docs, &[PageRef::new("a.pdf", 0)]).unwrap();

    let page_id = *output.get_pages().values().next().unwrap();
    let page = output.get_dictionary(page_id).unwrap();
    assert!(page.has(b"MediaBox"));
    assert!(page.has(b"Resources"));
    assert_eq!(page_size(&output, page_id), (612.0, 792.0));
}

#[test]
fn test_missing_pages_are_skipped() {
    let docs = sources(&[("a.pdf", 2, "A")]);
    let pages = vec![PageRef::new("a.pdf", 5), PageRef::new("a.pdf", 1)];

    let output = assemble(&docs, &pages).unwrap();
    assert_eq!(page_markers(&output), vec!["A-P2"]);
}

#[test]
fn test_nothing_to_assemble() {
    let docs = sources(&[("a.pdf", 2, "A")]);
    assert!(matches!(assemble(&docs, &[]), Err(OrganizeError::NoPages)));
    assert!(matches!(
        assemble(&docs, &[PageRef::new("a.pdf", 9)]),
        Err(OrganizeError::NoPages)
    ));
}

#[test]
fn test_unloaded_source_is_an_error() {
    let docs = sources(&[("a.pdf", 2, "A")]);
    let result = assemble(&docs, &[PageRef::new("b.pdf", 0)]);
    assert!(matches!(result, Err(OrganizeError::Config(_))));
}

#[test]
fn test_merge_keeps_input_order() {
    let inputs = vec![
        (PathBuf::from("b.pdf"), create_test_pdf(2, "B")),
        (PathBuf::from("a.pdf"), create_test_pdf(1, "A")),
        (PathBuf::from("b.pdf"), create_test_pdf(2, "B")),
    ];
    let merged = merge_documents(inputs).unwrap();
    assert_eq!(
        page_markers(&merged),
        vec!["B-P1", "B-P2", "A-P1", "B-P1", "B-P2"]
    );
}

#[test]
fn test_merge_without_inputs() {
    assert!(merge_documents(Vec::new()).is_err());
}

#[test]
fn test_default_merged_filename() {
    let none: [&Path; 0] = [];
    assert_eq!(default_merged_filename(&none), "merged.pdf");
    assert_eq!(
        default_merged_filename(&["/tmp/a.pdf", "/tmp/b.pdf"]),
        "a+b_merged.pdf"
    );
    assert_eq!(
        default_merged_filename(&["a.pdf", "b.pdf", "c.pdf", "d.pdf"]),
        "a+b+c_et_al_merged.pdf"
    );
}

#[test]
fn test_extraction_plan_names_outputs_by_token() {
    let plan = plan_extraction(Path::new("/docs/report.pdf"), "1-3, 7 ,9-", 10).unwrap();
    assert_eq!(
        plan,
        vec![
            ExtractionOutput {
                file_name: "report_1_3.pdf".into(),
                pages: vec![0, 1, 2],
            },
            ExtractionOutput {
                file_name: "report_7.pdf".into(),
                pages: vec![6],
            },
            ExtractionOutput {
                file_name: "report_9_.pdf".into(),
                pages: vec![8, 9],
            },
        ]
    );
}

#[test]
fn test_extraction_plan_rejects_bad_token() {
    assert!(plan_extraction(Path::new("report.pdf"), "1-3,x", 10).is_err());
    assert!(
        plan_extraction(Path::new("report.pdf"), "", 10)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_split_all_plan() {
    let plan = plan_split_all(Path::new("scan.pdf"), 3);
    let names: Vec<&str> = plan.iter().map(|o| o.file_name.as_str()).collect();
    assert_eq!(names, vec!["scan_page_1.pdf", "scan_page_2.pdf", "scan_page_3.pdf"]);
    assert_eq!(plan[2].pages, vec![2]);
}

#[tokio::test]
async fn test_save_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("nested/deeper/out.pdf");

    save_pdf(create_test_pdf(2, "A"), &out_path).await.unwrap();

    assert!(out_path.exists());
    assert_eq!(count_pages(&out_path).unwrap(), 2);
}

#[tokio::test]
async fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = load_pdf(dir.path().join("absent.pdf"), None).await;
    assert!(matches!(result, Err(OrganizeError::Io(_))));
}

#[tokio::test]
async fn test_load_sources_deduplicates() {
    let dir = TempDir::new().unwrap();
    let a = write_test_pdf(dir.path(), "a.pdf", 2, "A");
    let paths = [a.as_path(), a.as_path()];

    let loaded = load_sources(paths).await.unwrap();
    assert_eq!(loaded.len(), 1);
}

#[test]
fn test_protect_requires_a_password() {
    let result = encrypt(Path::new("a.pdf"), create_test_pdf(1, "A"), "", "");
    assert!(matches!(result, Err(OrganizeError::Config(_))));
}

#[test]
fn test_protect_marks_document_encrypted() {
    let doc = encrypt(Path::new("a.pdf"), create_test_pdf(2, "A"), "user", "").unwrap();
    assert!(doc.trailer.get(b"Encrypt").is_ok());
    assert!(doc.trailer.get(b"ID").is_ok());
    assert_eq!(doc.get_pages().len(), 2);
}

#[test]
fn test_unlock_copies_every_page() {
    let doc = unlock(Path::new("a.pdf"), create_test_pdf(3, "A")).unwrap();
    assert_eq!(page_markers(&doc), vec!["A-P1", "A-P2", "A-P3"]);
    assert!(doc.trailer.get(b"Encrypt").is_err());
}

/// Protect a three-page document with separate user and owner passwords and
/// write it into `dir`.
async fn write_protected_pdf(dir: &Path) -> PathBuf {
    let path = dir.join("protected.pdf");
    let doc = encrypt(Path::new("a.pdf"), create_test_pdf(3, "A"), "user", "owner").unwrap();
    save_pdf(doc, &path).await.unwrap();
    path
}

#[tokio::test]
async fn test_load_protected_without_password_is_auth_error() {
    let dir = TempDir::new().unwrap();
    let path = write_protected_pdf(dir.path()).await;

    let result = load_pdf(&path, None).await;
    assert!(matches!(result, Err(OrganizeError::Auth(_))));
}

#[tokio::test]
async fn test_load_protected_with_wrong_password_is_auth_error() {
    let dir = TempDir::new().unwrap();
    let path = write_protected_pdf(dir.path()).await;

    let result = load_pdf(&path, Some("guess")).await;
    assert!(matches!(result, Err(OrganizeError::Auth(_))));
}

#[tokio::test]
async fn test_load_protected_with_user_password() {
    let dir = TempDir::new().unwrap();
    let path = write_protected_pdf(dir.path()).await;

    let doc = load_pdf(&path, Some("user")).await.unwrap();
    assert!(!doc.is_encrypted());
    assert_eq!(page_markers(&doc), vec!["A-P1", "A-P2", "A-P3"]);
}

#[tokio::test]
async fn test_load_protected_with_owner_password() {
    let dir = TempDir::new().unwrap();
    let path = write_protected_pdf(dir.path()).await;

    let doc = load_pdf(&path, Some("owner")).await.unwrap();
    assert!(!doc.is_encrypted());
    assert_eq!(page_markers(&doc), vec!["A-P1", "A-P2", "A-P3"]);
}

#[tokio::test]
async fn test_protect_then_unlock_round_trip() {
    let dir = TempDir::new().unwrap();
    let protected = write_protected_pdf(dir.path()).await;
    let unlocked_path = dir.path().join("unlocked.pdf");

    let doc = load_pdf(&protected, Some("owner")).await.unwrap();
    save_pdf(unlock(&protected, doc).unwrap(), &unlocked_path)
        .await
        .unwrap();

    let reloaded = load_pdf(&unlocked_path, None).await.unwrap();
    assert!(!reloaded.is_encrypted());
    assert_eq!(page_markers(&reloaded), vec!["A-P1", "A-P2", "A-P3"]);
}
