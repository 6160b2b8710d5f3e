//! Response types for the request/response pattern

use serde::{Deserialize, Serialize};

// =============================================================================
// Response Result
// =============================================================================

/// Result of a request operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResponseResult {
    /// Operation succeeded
    Success {
        /// Optional data payload (varies by request type)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<serde_json::Value>,
    },
    /// Operation failed
    Error {
        /// Error classification code
        code: ErrorCode,
        /// Human-readable error message
        message: String,
        /// Additional error details (per-field validation errors, for example)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<serde_json::Value>,
    },
    /// Unknown response type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl ResponseResult {
    /// Create a success response with data
    pub fn success<T: Serialize>(data: T) -> Self {
        ResponseResult::Success {
            data: Some(serde_json::to_value(data).unwrap_or_default()),
        }
    }

    /// Create a success response without data
    pub fn success_empty() -> Self {
        ResponseResult::Success { data: None }
    }

    /// Create an error response
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        ResponseResult::Error {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response with details
    pub fn error_with_details<T: Serialize>(
        code: ErrorCode,
        message: impl Into<String>,
        details: T,
    ) -> Self {
        ResponseResult::Error {
            code,
            message: message.into(),
            details: Some(serde_json::to_value(details).unwrap_or_default()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseResult::Success { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResponseResult::Error { .. })
    }

    /// Error code, if this is an error response
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            ResponseResult::Error { code, .. } => Some(*code),
            _ => None,
        }
    }
}

// =============================================================================
// Error Codes
// =============================================================================

/// Error classification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // === Client Errors ===
    /// Request was malformed or named an unknown setting
    BadRequest,
    /// Requested resource not found (or owned by someone else)
    NotFound,
    /// Operation conflicts with stored state (duplicate name, for example)
    Conflict,
    /// Request data failed validation
    ValidationError,

    // === Server Errors ===
    /// Internal error; details are only logged
    InternalError,

    /// Unknown variant for forward compatibility
    #[serde(other)]
    Unknown,
}

// =============================================================================
// Payloads
// =============================================================================

/// Issued upload slot for a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTicket {
    pub document_id: String,
    pub file_key: String,
    pub upload_url: String,
    /// Seconds the upload URL stays valid
    pub expires_in_secs: u64,
}
