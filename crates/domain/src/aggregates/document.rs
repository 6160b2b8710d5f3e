//! Document aggregate - reference to an uploaded rulebook or handout
//!
//! The file itself lives in external storage; this record only tracks where.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{DocumentId, UserId};
use crate::value_objects::DocumentName;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    id: DocumentId,
    owner_id: UserId,
    name: DocumentName,
    file_key: String,
    file_url: String,
    mime_type: String,
    file_size: u64,
    extracted_text: Option<String>,
    created_at: DateTime<Utc>,
}

impl Document {
    pub fn new(
        owner_id: UserId,
        name: DocumentName,
        file_key: impl Into<String>,
        file_url: impl Into<String>,
        mime_type: impl Into<String>,
        file_size: u64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: DocumentId::new(),
            owner_id,
            name,
            file_key: file_key.into(),
            file_url: file_url.into(),
            mime_type: mime_type.into(),
            file_size,
            extracted_text: None,
            created_at: now,
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    pub fn name(&self) -> &DocumentName {
        &self.name
    }

    /// Storage key the upload was authorized for.
    pub fn file_key(&self) -> &str {
        &self.file_key
    }

    pub fn file_url(&self) -> &str {
        &self.file_url
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Text pulled out of the file by a later indexing pass, if any.
    pub fn extracted_text(&self) -> Option<&str> {
        self.extracted_text.as_deref()
    }

    pub fn with_extracted_text(mut self, text: impl Into<String>) -> Self {
        self.extracted_text = Some(text.into());
        self
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner_id == user
    }
}
