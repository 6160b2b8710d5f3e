use tabletophub_domain::UserId;
use tabletophub_shared::{DocumentRequest, ErrorCode, ResponseResult, UploadTicket};

use super::error_sanitizer::sanitize_error;
use super::{parse_id, repo_error_response};
use crate::app::App;
use crate::infrastructure::ports::UploadError;
use crate::use_cases::DocumentError;

pub(super) async fn handle_document_request(
    app: &App,
    owner: UserId,
    request: DocumentRequest,
) -> ResponseResult {
    tracing::debug!(owner = %owner, request_type = ?request, "Handling document request");

    match request {
        DocumentRequest::RequestUpload { data } => {
            match app
                .use_cases
                .documents
                .request_upload(owner, &data.file_name, &data.mime_type, data.file_size)
                .await
            {
                Ok(issued) => ResponseResult::success(UploadTicket {
                    document_id: issued.document.id().to_string(),
                    file_key: issued.document.file_key().to_string(),
                    upload_url: issued.upload_url,
                    expires_in_secs: issued.expires_in.as_secs(),
                }),
                Err(e) => document_error_response(e, "request upload"),
            }
        }

        DocumentRequest::ListDocuments => match app.use_cases.documents.list(owner).await {
            Ok(documents) => ResponseResult::success(documents),
            Err(e) => document_error_response(e, "list documents"),
        },

        DocumentRequest::DeleteDocument { document_id } => {
            let id = match parse_id(&document_id, "document") {
                Ok(id) => id,
                Err(response) => return response,
            };
            match app.use_cases.documents.delete(owner, id).await {
                Ok(()) => ResponseResult::success_empty(),
                Err(e) => document_error_response(e, "delete document"),
            }
        }
    }
}

fn document_error_response(error: DocumentError, operation: &str) -> ResponseResult {
    match error {
        DocumentError::NotFound(_) => {
            ResponseResult::error(ErrorCode::NotFound, "Document not found")
        }
        DocumentError::TooLarge { .. } | DocumentError::InvalidInput(_) => {
            ResponseResult::error(ErrorCode::BadRequest, error.to_string())
        }
        DocumentError::Domain(e) => ResponseResult::error(ErrorCode::BadRequest, e.to_string()),
        DocumentError::Upload(UploadError::Rejected(reason)) => {
            ResponseResult::error(ErrorCode::BadRequest, reason)
        }
        DocumentError::Upload(e @ UploadError::Unavailable(_)) => ResponseResult::error(
            ErrorCode::InternalError,
            sanitize_error(&e, "authorizing the upload"),
        ),
        DocumentError::Repo(e) => repo_error_response(&e, operation),
    }
}
