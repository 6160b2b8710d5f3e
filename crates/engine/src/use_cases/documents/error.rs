//! Document operation errors.

use crate::infrastructure::ports::{RepoError, UploadError};
use tabletophub_domain::{DocumentId, DomainError};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Document not found: {0}")]
    NotFound(DocumentId),

    #[error("File is {size} bytes, limit is {max}")]
    TooLarge { size: u64, max: u64 },

    #[error("Invalid upload: {0}")]
    InvalidInput(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
