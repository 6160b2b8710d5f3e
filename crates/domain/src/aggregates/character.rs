//! Character aggregate - a stored player character
//!
//! # Invariants
//!
//! - Built only from a [`ValidatedCharacter`], so the attribute assignment satisfies the
//!   setting's scheme and every required field is present
//! - The setting never changes after creation
//! - Belongs to exactly one owner; the campaign link is optional

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::attributes::AttributeAssignment;
use crate::game_settings::GameSetting;
use crate::ids::{CampaignId, CharacterId, UserId};
use crate::value_objects::CharacterName;
use crate::wizard::ValidatedCharacter;

/// Where a character comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterOrigin {
    pub birth_vector: String,
    pub point_of_origin: String,
    pub faction: String,
    pub edict: String,
}

/// A player character record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    // Identity
    id: CharacterId,
    owner_id: UserId,
    campaign_id: Option<CampaignId>,

    setting: GameSetting,
    name: CharacterName,
    origin: CharacterOrigin,
    attributes: AttributeAssignment,

    // Freeform
    proficiencies: Option<String>,
    equipment: Option<String>,
    notes: Option<String>,

    created_at: DateTime<Utc>,
}

impl Character {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Creates the record for a submission that passed full validation.
    pub fn create(owner_id: UserId, submission: ValidatedCharacter, now: DateTime<Utc>) -> Self {
        Self {
            id: CharacterId::new(),
            owner_id,
            campaign_id: submission.campaign_id(),
            setting: submission.setting(),
            name: submission.name().clone(),
            origin: submission.origin().clone(),
            attributes: submission.attributes().clone(),
            proficiencies: submission.proficiencies().map(str::to_string),
            equipment: submission.equipment().map(str::to_string),
            notes: submission.notes().map(str::to_string),
            created_at: now,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    #[inline]
    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    #[inline]
    pub fn campaign_id(&self) -> Option<CampaignId> {
        self.campaign_id
    }

    #[inline]
    pub fn setting(&self) -> GameSetting {
        self.setting
    }

    #[inline]
    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    pub fn origin(&self) -> &CharacterOrigin {
        &self.origin
    }

    pub fn attributes(&self) -> &AttributeAssignment {
        &self.attributes
    }

    pub fn proficiencies(&self) -> Option<&str> {
        self.proficiencies.as_deref()
    }

    pub fn equipment(&self) -> Option<&str> {
        self.equipment.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns true if `user` owns this character.
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner_id == user
    }

    /// Alignment summary ("+37 Gnosis"), for settings that have an alignment axis.
    pub fn alignment_descriptor(&self) -> Option<String> {
        self.setting.scheme().alignment_descriptor(&self.attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SheetValue, SheetValues};
    use crate::wizard::fields;

    fn validated(setting: GameSetting, name: &str) -> ValidatedCharacter {
        let mut values: SheetValues = AttributeAssignment::initialize(&setting.scheme())
            .iter()
            .map(|(key, value)| (key.as_str().to_string(), SheetValue::Integer(value)))
            .collect();
        for (field, text) in [
            (fields::NAME, name),
            (fields::BIRTH_VECTOR, "Void-born"),
            (fields::POINT_OF_ORIGIN, "Kessel Drift"),
            (fields::FACTION, "Ascendancy"),
            (fields::EDICT, "Silence"),
        ] {
            values.insert(field.to_string(), SheetValue::from(text));
        }
        ValidatedCharacter::validate(setting, &values).unwrap()
    }

    #[test]
    fn create_copies_the_validated_payload() {
        let owner = UserId::new();
        let now = Utc::now();
        let character = Character::create(
            owner,
            validated(GameSetting::ConflictHorizon, "Vex Orlan"),
            now,
        );

        assert!(character.is_owned_by(owner));
        assert!(!character.is_owned_by(UserId::new()));
        assert_eq!(character.name().as_str(), "Vex Orlan");
        assert_eq!(character.setting(), GameSetting::ConflictHorizon);
        assert_eq!(character.origin().edict, "Silence");
        assert_eq!(character.created_at(), now);
        assert_eq!(character.alignment_descriptor().as_deref(), Some("Neutral"));
    }

    #[test]
    fn settings_without_alignment_have_no_descriptor() {
        let character = Character::create(
            UserId::new(),
            validated(GameSetting::PlanetOfTheSong, "Asha"),
            Utc::now(),
        );
        assert_eq!(character.alignment_descriptor(), None);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let character = Character::create(
            UserId::new(),
            validated(GameSetting::HarrowingTruth, "Marlowe"),
            Utc::now(),
        );
        let json = serde_json::to_value(&character).unwrap();

        assert_eq!(json["setting"], "Harrowing Truth");
        assert_eq!(json["origin"]["pointOfOrigin"], "Kessel Drift");
        assert_eq!(json["attributes"]["katra"], 60);
        assert!(json["campaignId"].is_null());

        let back: Character = serde_json::from_value(json).unwrap();
        assert_eq!(back, character);
    }
}
