use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrganizeError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid range: {0}")]
    InvalidRange(String),
    #[error("Password rejected: {0}")]
    Auth(String),
    #[error("Render error: {0}")]
    Render(String),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to write")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, OrganizeError>;
