//! Document I/O

use crate::protect::decrypt_with_password;
use crate::types::*;
use lopdf::Document;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Load a PDF, decrypting it with `password` when one is given.
///
/// A document that stays encrypted after lopdf's empty-password attempt
/// fails with [`OrganizeError::Auth`] unless `password` opens it.
pub async fn load_pdf(path: impl AsRef<Path>, password: Option<&str>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let password = password.map(str::to_owned);
    let bytes = tokio::fs::read(&path).await?;
    tokio::task::spawn_blocking(move || {
        let mut doc = Document::load_mem(&bytes).map_err(classify_load_error)?;
        if doc.is_encrypted() {
            let password = password.ok_or_else(|| {
                OrganizeError::Auth(format!("{} is password protected", path.display()))
            })?;
            decrypt_with_password(&mut doc, &password)?;
        }
        Ok::<_, OrganizeError>(doc)
    })
    .await?
}

/// Load every distinct path once, keyed by path
pub async fn load_sources<'a>(
    paths: impl IntoIterator<Item = &'a Path>,
) -> Result<HashMap<PathBuf, Document>> {
    let mut sources = HashMap::new();
    for path in paths {
        if sources.contains_key(path) {
            continue;
        }
        log::debug!("Loading source {}", path.display());
        let doc = load_pdf(path, None).await?;
        sources.insert(path.to_owned(), doc);
    }
    Ok(sources)
}

/// Page count read synchronously, for validating input before a job starts
pub fn count_pages(path: impl AsRef<Path>) -> Result<usize> {
    let doc = Document::load(path.as_ref()).map_err(classify_load_error)?;
    Ok(doc.get_pages().len())
}

/// Serialize `doc` to `path`, creating missing parent directories.
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, OrganizeError>(writer)
    })
    .await??;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

pub(crate) fn classify_load_error(err: lopdf::Error) -> OrganizeError {
    match err {
        lopdf::Error::Decryption(e) => OrganizeError::Auth(e.to_string()),
        other => OrganizeError::Pdf(other),
    }
}
