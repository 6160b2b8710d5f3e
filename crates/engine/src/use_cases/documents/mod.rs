//! Uploaded rulebooks and handouts.
//!
//! The engine never touches file bytes. `request_upload` reserves a storage key, asks the
//! storage collaborator for a short-lived upload URL and records where the file will live.

mod error;

use std::sync::Arc;
use std::time::Duration;

use tabletophub_domain::{Document, DocumentId, DocumentName, UserId};

use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::ports::{ClockPort, DocumentRepo, RepoError, UploadAuthorizer};

pub use error::DocumentError;

/// A reserved document together with the URL the client uploads to.
#[derive(Debug, Clone)]
pub struct IssuedUpload {
    pub document: Document,
    pub upload_url: String,
    pub expires_in: Duration,
}

pub struct DocumentUseCases {
    documents: Arc<dyn DocumentRepo>,
    uploads: Arc<dyn UploadAuthorizer>,
    clock: Arc<dyn ClockPort>,
    key_prefix: String,
    upload_ttl: Duration,
    max_bytes: u64,
}

impl DocumentUseCases {
    pub fn new(
        documents: Arc<dyn DocumentRepo>,
        uploads: Arc<dyn UploadAuthorizer>,
        clock: Arc<dyn ClockPort>,
        config: &EngineConfig,
    ) -> Self {
        Self {
            documents,
            uploads,
            clock,
            key_prefix: config.document_key_prefix.clone(),
            upload_ttl: config.upload_url_ttl,
            max_bytes: config.max_document_bytes,
        }
    }

    pub async fn request_upload(
        &self,
        owner: UserId,
        file_name: &str,
        mime_type: &str,
        file_size: u64,
    ) -> Result<IssuedUpload, DocumentError> {
        let name = DocumentName::new(file_name)?;
        let mime_type = mime_type.trim();
        if mime_type.is_empty() {
            return Err(DocumentError::InvalidInput(
                "MIME type is required".to_string(),
            ));
        }
        if file_size == 0 {
            return Err(DocumentError::InvalidInput("File is empty".to_string()));
        }
        if file_size > self.max_bytes {
            return Err(DocumentError::TooLarge {
                size: file_size,
                max: self.max_bytes,
            });
        }

        let now = self.clock.now();
        let file_key = format!(
            "{}/{}/{}-{}",
            self.key_prefix,
            owner,
            now.timestamp_millis(),
            name
        );

        let authorization = self
            .uploads
            .authorize_upload(&file_key, mime_type, file_size, self.upload_ttl)
            .await?;

        let document = Document::new(
            owner,
            name,
            file_key,
            authorization.file_url,
            mime_type,
            file_size,
            now,
        );
        self.documents.save(&document).await?;

        tracing::info!(
            document_id = %document.id(),
            owner = %owner,
            file_key = %document.file_key(),
            file_size,
            "Document upload authorized"
        );

        Ok(IssuedUpload {
            document,
            upload_url: authorization.upload_url,
            expires_in: self.upload_ttl,
        })
    }

    pub async fn list(&self, owner: UserId) -> Result<Vec<Document>, DocumentError> {
        Ok(self.documents.list_for_owner(owner).await?)
    }

    /// Removes the record only. Stored bytes are left to the storage service's lifecycle rules.
    pub async fn delete(&self, owner: UserId, id: DocumentId) -> Result<(), DocumentError> {
        let owned = self
            .documents
            .get(id)
            .await?
            .is_some_and(|document| document.is_owned_by(owner));
        if !owned {
            return Err(DocumentError::NotFound(id));
        }
        self.documents.delete(id).await.map_err(|e| match e {
            RepoError::NotFound { .. } => DocumentError::NotFound(id),
            other => other.into(),
        })?;
        tracing::info!(document_id = %id, owner = %owner, "Document deleted");
        Ok(())
    }
}
