use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tabletophub_domain::{
    Campaign, CampaignId, Character, CharacterId, Document, DocumentId, GameSetting, UserId,
    ValidatedCharacter,
};

use super::RepoError;

// =============================================================================
// Database Ports (one per record type)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    /// Stores a validated submission and returns the record with its assigned id.
    ///
    /// Fails with `UniqueViolation` when the owner already has a character with the same
    /// name in the same setting, and `ForeignKeyViolation` when the campaign is unknown.
    async fn create(
        &self,
        owner: UserId,
        character: ValidatedCharacter,
        created_at: DateTime<Utc>,
    ) -> Result<Character, RepoError>;
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError>;
    /// Newest first.
    async fn list_for_owner(
        &self,
        owner: UserId,
        setting: Option<GameSetting>,
    ) -> Result<Vec<Character>, RepoError>;
    async fn delete(&self, id: CharacterId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampaignRepo: Send + Sync {
    async fn get(&self, id: CampaignId) -> Result<Option<Campaign>, RepoError>;
    async fn save(&self, campaign: &Campaign) -> Result<(), RepoError>;
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<Campaign>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentRepo: Send + Sync {
    async fn save(&self, document: &Document) -> Result<(), RepoError>;
    async fn get(&self, id: DocumentId) -> Result<Option<Document>, RepoError>;
    /// Newest first.
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<Document>, RepoError>;
    async fn delete(&self, id: DocumentId) -> Result<(), RepoError>;
}
