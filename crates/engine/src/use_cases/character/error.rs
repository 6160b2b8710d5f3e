//! Character record errors.

use crate::infrastructure::ports::RepoError;
use tabletophub_domain::CharacterId;

#[derive(Debug, thiserror::Error)]
pub enum CharacterError {
    /// Missing, or owned by someone else.
    #[error("Character not found: {0}")]
    NotFound(CharacterId),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
