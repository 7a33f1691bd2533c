use pdf_organize::OrganizeError;
use pdf_stamp::StampError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobError {
    #[error(transparent)]
    Organize(#[from] OrganizeError),
    #[error(transparent)]
    Stamp(#[from] StampError),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("{0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, JobError>;
