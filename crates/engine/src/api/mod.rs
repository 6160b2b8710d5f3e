//! Request dispatch.
//!
//! Maps wire payloads from the transport collaborator onto use cases, and use case errors
//! onto `ErrorCode`s. The caller has already authenticated the user; `owner` is trusted.

mod characters;
mod documents;
pub mod error_sanitizer;

use std::str::FromStr;

use tabletophub_domain::UserId;
use tabletophub_shared::{ErrorCode, RequestPayload, ResponseResult};

use crate::app::App;
use crate::infrastructure::ports::RepoError;
use error_sanitizer::sanitize_repo_error;

/// Handles one request on behalf of `owner`.
pub async fn handle_request(app: &App, owner: UserId, payload: RequestPayload) -> ResponseResult {
    match payload {
        RequestPayload::Character(request) => {
            characters::handle_character_request(app, owner, request).await
        }
        RequestPayload::Document(request) => {
            documents::handle_document_request(app, owner, request).await
        }
    }
}

fn parse_id<T: FromStr>(raw: &str, what: &str) -> Result<T, ResponseResult> {
    raw.parse::<T>().map_err(|_| {
        tracing::debug!(raw, what, "Rejected malformed id");
        ResponseResult::error(ErrorCode::BadRequest, format!("Invalid {} ID", what))
    })
}

fn repo_error_response(error: &RepoError, operation: &str) -> ResponseResult {
    match error {
        RepoError::UniqueViolation(message) | RepoError::ForeignKeyViolation(message) => {
            ResponseResult::error(ErrorCode::Conflict, message.clone())
        }
        RepoError::NotFound { .. } => ResponseResult::error(ErrorCode::NotFound, error.to_string()),
        RepoError::Database { .. } | RepoError::Serialization(_) => ResponseResult::error(
            ErrorCode::InternalError,
            sanitize_repo_error(error, operation),
        ),
    }
}
