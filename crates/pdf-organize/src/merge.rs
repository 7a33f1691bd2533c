//! Merging whole documents

use crate::assemble::assemble;
use crate::collection::PageRef;
use crate::types::*;
use lopdf::Document;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Inputs named in the suggested output file before it gets abbreviated
const NAMED_INPUTS: usize = 3;

/// Concatenate every page of every input, inputs in order.
///
/// The same path may appear more than once; its pages are then repeated.
pub fn merge_documents(inputs: Vec<(PathBuf, Document)>) -> Result<Document> {
    if inputs.is_empty() {
        return Err(OrganizeError::NoPages);
    }

    let mut pages = Vec::new();
    let mut sources = HashMap::new();
    for (path, doc) in inputs {
        pages.extend(PageRef::all_pages(&path, doc.get_pages().len()));
        sources.entry(path).or_insert(doc);
    }

    assemble(&sources, &pages)
}

/// Suggested output name, e.g. `a+b+c_et_al_merged.pdf`
pub fn default_merged_filename(inputs: &[impl AsRef<Path>]) -> String {
    if inputs.is_empty() {
        return "merged.pdf".to_string();
    }

    let stems: Vec<String> = inputs
        .iter()
        .take(NAMED_INPUTS)
        .map(|p| {
            p.as_ref()
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .collect();

    let mut name = stems.join("+");
    if inputs.len() > NAMED_INPUTS {
        name.push_str("_et_al");
    }
    format!("{name}_merged.pdf")
}
