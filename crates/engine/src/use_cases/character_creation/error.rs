//! Character creation errors.

use crate::infrastructure::ports::RepoError;
use tabletophub_domain::{AllocationError, CampaignId, FinalValidationFailure};

/// Errors that can occur while creating a character.
#[derive(Debug, thiserror::Error)]
pub enum CharacterCreationError {
    /// The requested setting is not in the catalog.
    #[error(transparent)]
    Setting(#[from] AllocationError),

    #[error(transparent)]
    Validation(#[from] FinalValidationFailure),

    /// Unknown campaign, or one belonging to another user.
    #[error("Campaign not found: {0}")]
    CampaignNotFound(CampaignId),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
