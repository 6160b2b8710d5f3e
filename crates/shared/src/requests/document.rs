use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DocumentRequest {
    /// Ask for a short-lived upload URL and register the document record.
    RequestUpload { data: RequestUploadData },
    ListDocuments,
    DeleteDocument { document_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestUploadData {
    pub file_name: String,
    pub mime_type: String,
    pub file_size: u64,
}
