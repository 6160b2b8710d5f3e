//! Campaign aggregate - a group a character can optionally be filed under

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game_settings::GameSetting;
use crate::ids::{CampaignId, UserId};
use crate::value_objects::CampaignName;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    id: CampaignId,
    owner_id: UserId,
    name: CampaignName,
    setting: GameSetting,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl Campaign {
    pub fn new(
        owner_id: UserId,
        name: CampaignName,
        setting: GameSetting,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CampaignId::new(),
            owner_id,
            name,
            setting,
            description: None,
            created_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.trim().is_empty()).then_some(description);
        self
    }

    pub fn with_id(mut self, id: CampaignId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> CampaignId {
        self.id
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    pub fn name(&self) -> &CampaignName {
        &self.name
    }

    pub fn setting(&self) -> GameSetting {
        self.setting
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner_id == user
    }
}
