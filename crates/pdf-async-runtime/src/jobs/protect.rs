use crate::channel::ProgressSender;
use crate::error::Result;
use pdf_organize::{encrypt, load_pdf, save_pdf, unlock as decrypt};
use std::path::PathBuf;

pub(super) async fn protect(
    input: PathBuf,
    output: PathBuf,
    user_password: String,
    owner_password: String,
    events: &ProgressSender,
) -> Result<String> {
    let doc = load_pdf(&input, None).await?;
    events.status("Encrypting...");
    events.progress(40);
    let encrypted = tokio::task::spawn_blocking(move || {
        encrypt(&input, doc, &user_password, &owner_password)
    })
    .await??;
    save_pdf(encrypted, &output).await?;
    events.progress(100);

    Ok(format!(
        "Password(s) added successfully! Output saved to: {}",
        output.display()
    ))
}

pub(super) async fn unlock(
    input: PathBuf,
    output: PathBuf,
    password: String,
    events: &ProgressSender,
) -> Result<String> {
    let doc = load_pdf(&input, Some(&password)).await?;
    events.status("Decrypting...");
    events.progress(40);
    let plain = tokio::task::spawn_blocking(move || decrypt(&input, doc)).await??;
    save_pdf(plain, &output).await?;
    events.progress(100);

    Ok(format!(
        "Password removed successfully! Output saved to: {}",
        output.display()
    ))
}
