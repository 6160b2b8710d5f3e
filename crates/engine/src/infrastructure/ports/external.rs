//! External service port traits (document storage).

use std::time::Duration;

use async_trait::async_trait;

use super::error::UploadError;

// =============================================================================
// Upload Authorization
// =============================================================================

/// A short-lived permission to put one file into storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadAuthorization {
    /// Where the client sends the bytes
    pub upload_url: String,
    /// Where the stored file will be readable afterwards
    pub file_url: String,
}

/// Issues pre-authorized upload URLs for the storage service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UploadAuthorizer: Send + Sync {
    async fn authorize_upload(
        &self,
        file_key: &str,
        mime_type: &str,
        file_size: u64,
        ttl: Duration,
    ) -> Result<UploadAuthorization, UploadError>;
}
