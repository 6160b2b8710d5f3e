//! Error sanitization for client-facing messages.
//!
//! Prevents leaking internal details (storage errors, service responses) to clients.

/// Sanitize an error for client consumption.
///
/// Logs the full error server-side, returns generic message for client.
pub fn sanitize_error<E: std::fmt::Display>(error: &E, context: &str) -> String {
    tracing::error!(
        error = %error,
        context = context,
        "Internal error occurred"
    );

    format!("An error occurred while {}", context)
}

/// Sanitize a repository error.
pub fn sanitize_repo_error<E: std::fmt::Display>(error: &E, operation: &str) -> String {
    tracing::error!(
        error = %error,
        operation = operation,
        "Repository error"
    );

    format!("Failed to {} - please try again", operation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::RepoError;

    #[test]
    fn repo_details_stay_server_side() {
        let err = RepoError::database("insert character", "disk I/O error at /var/lib/db");
        let message = sanitize_repo_error(&err, "create character");
        assert_eq!(message, "Failed to create character - please try again");
        assert!(!message.contains("/var/lib"));
    }

    #[test]
    fn generic_errors_name_only_the_context() {
        let message = sanitize_error(&"connection refused", "authorizing the upload");
        assert_eq!(message, "An error occurred while authorizing the upload");
    }
}
