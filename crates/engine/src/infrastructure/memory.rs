//! In-memory record stores.
//!
//! Backed by `DashMap`, these implement the repository ports with the same constraints a
//! relational store would enforce: one character name per (owner, setting) and a campaign
//! foreign key on characters.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tabletophub_domain::{
    Campaign, CampaignId, Character, CharacterId, Document, DocumentId, GameSetting, UserId,
    ValidatedCharacter,
};

use crate::infrastructure::ports::{
    CampaignRepo, CharacterRepo, DocumentRepo, RepoError, UploadAuthorization, UploadAuthorizer,
    UploadError,
};

// =============================================================================
// Campaigns
// =============================================================================

#[derive(Default)]
pub struct InMemoryCampaignRepo {
    campaigns: DashMap<CampaignId, Campaign>,
}

impl InMemoryCampaignRepo {
    pub fn new() -> Self {
        Self::default()
    }

    fn contains(&self, id: CampaignId) -> bool {
        self.campaigns.contains_key(&id)
    }
}

#[async_trait]
impl CampaignRepo for InMemoryCampaignRepo {
    async fn get(&self, id: CampaignId) -> Result<Option<Campaign>, RepoError> {
        Ok(self.campaigns.get(&id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, campaign: &Campaign) -> Result<(), RepoError> {
        self.campaigns.insert(campaign.id(), campaign.clone());
        Ok(())
    }

    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<Campaign>, RepoError> {
        let mut campaigns: Vec<Campaign> = self
            .campaigns
            .iter()
            .filter(|entry| entry.is_owned_by(owner))
            .map(|entry| entry.value().clone())
            .collect();
        campaigns.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(campaigns)
    }
}

// =============================================================================
// Characters
// =============================================================================

type NameKey = (UserId, GameSetting, String);

pub struct InMemoryCharacterRepo {
    characters: DashMap<CharacterId, Character>,
    /// Unique index over (owner, setting, name)
    names: DashMap<NameKey, CharacterId>,
    campaigns: Arc<InMemoryCampaignRepo>,
}

impl InMemoryCharacterRepo {
    pub fn new(campaigns: Arc<InMemoryCampaignRepo>) -> Self {
        Self {
            characters: DashMap::new(),
            names: DashMap::new(),
            campaigns,
        }
    }

    fn name_key(character: &Character) -> NameKey {
        (
            character.owner_id(),
            character.setting(),
            character.name().as_str().to_string(),
        )
    }
}

#[async_trait]
impl CharacterRepo for InMemoryCharacterRepo {
    async fn create(
        &self,
        owner: UserId,
        character: ValidatedCharacter,
        created_at: DateTime<Utc>,
    ) -> Result<Character, RepoError> {
        if let Some(campaign_id) = character.campaign_id() {
            if !self.campaigns.contains(campaign_id) {
                return Err(RepoError::foreign_key(format!(
                    "campaign {campaign_id} does not exist"
                )));
            }
        }

        let record = Character::create(owner, character, created_at);
        match self.names.entry(Self::name_key(&record)) {
            Entry::Occupied(_) => Err(RepoError::unique(format!(
                "a {} character named '{}' already exists",
                record.setting(),
                record.name()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(record.id());
                self.characters.insert(record.id(), record.clone());
                Ok(record)
            }
        }
    }

    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        Ok(self.characters.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_for_owner(
        &self,
        owner: UserId,
        setting: Option<GameSetting>,
    ) -> Result<Vec<Character>, RepoError> {
        let mut characters: Vec<Character> = self
            .characters
            .iter()
            .filter(|entry| entry.is_owned_by(owner))
            .filter(|entry| setting.is_none_or(|s| entry.setting() == s))
            .map(|entry| entry.value().clone())
            .collect();
        characters.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(characters)
    }

    async fn delete(&self, id: CharacterId) -> Result<(), RepoError> {
        let (_, removed) = self
            .characters
            .remove(&id)
            .ok_or_else(|| RepoError::not_found("Character", id))?;
        self.names.remove(&Self::name_key(&removed));
        Ok(())
    }
}

// =============================================================================
// Documents
// =============================================================================

#[derive(Default)]
pub struct InMemoryDocumentRepo {
    documents: DashMap<DocumentId, Document>,
}

impl InMemoryDocumentRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentRepo for InMemoryDocumentRepo {
    async fn save(&self, document: &Document) -> Result<(), RepoError> {
        self.documents.insert(document.id(), document.clone());
        Ok(())
    }

    async fn get(&self, id: DocumentId) -> Result<Option<Document>, RepoError> {
        Ok(self.documents.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<Document>, RepoError> {
        let mut documents: Vec<Document> = self
            .documents
            .iter()
            .filter(|entry| entry.is_owned_by(owner))
            .map(|entry| entry.value().clone())
            .collect();
        documents.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(documents)
    }

    async fn delete(&self, id: DocumentId) -> Result<(), RepoError> {
        self.documents
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found("Document", id))
    }
}

// =============================================================================
// Upload authorization
// =============================================================================

/// Issues URLs under a fixed base without contacting any storage service.
pub struct LocalUploadAuthorizer {
    base_url: String,
}

impl LocalUploadAuthorizer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl UploadAuthorizer for LocalUploadAuthorizer {
    async fn authorize_upload(
        &self,
        file_key: &str,
        mime_type: &str,
        _file_size: u64,
        ttl: Duration,
    ) -> Result<UploadAuthorization, UploadError> {
        if mime_type.trim().is_empty() {
            return Err(UploadError::Rejected("MIME type is required".to_string()));
        }
        let file_url = format!("{}/{}", self.base_url, file_key);
        Ok(UploadAuthorization {
            upload_url: format!("{}?expires={}", file_url, ttl.as_secs()),
            file_url,
        })
    }
}
