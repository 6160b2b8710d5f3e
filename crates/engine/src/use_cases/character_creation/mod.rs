//! Character creation: scheme lookup, wizard sessions and the final submission.
//!
//! The submission path never trusts the wizard. Whatever steps the caller claims to
//! have passed, `create` re-runs the full schema before anything reaches storage.

mod error;

use std::sync::Arc;

use serde::Serialize;
use tabletophub_domain::{
    AttributeAssignment, AttributeScheme, Character, CharacterSchema, CreationSession,
    GameSetting, SheetValues, UserId, ValidatedCharacter,
};

use crate::infrastructure::ports::{CampaignRepo, CharacterRepo, ClockPort};

pub use error::CharacterCreationError;

/// Raw submission as collected by the wizard.
#[derive(Debug, Clone, Default)]
pub struct CreateCharacterInput {
    /// Omitted means the configured default setting
    pub setting: Option<String>,
    pub values: SheetValues,
}

/// Everything a client needs to render the wizard for one setting.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeDescription {
    pub setting: GameSetting,
    pub scheme: AttributeScheme,
    pub schema: CharacterSchema,
    pub initial_assignment: AttributeAssignment,
    pub alignment_descriptor: Option<String>,
}

pub struct CharacterCreationUseCases {
    characters: Arc<dyn CharacterRepo>,
    campaigns: Arc<dyn CampaignRepo>,
    clock: Arc<dyn ClockPort>,
    default_setting: GameSetting,
}

impl CharacterCreationUseCases {
    pub fn new(
        characters: Arc<dyn CharacterRepo>,
        campaigns: Arc<dyn CampaignRepo>,
        clock: Arc<dyn ClockPort>,
        default_setting: GameSetting,
    ) -> Self {
        Self {
            characters,
            campaigns,
            clock,
            default_setting,
        }
    }

    /// Only an omitted setting falls back to the default.
    pub fn resolve_setting(
        &self,
        setting: Option<&str>,
    ) -> Result<GameSetting, CharacterCreationError> {
        match setting {
            None => Ok(self.default_setting),
            Some(raw) => Ok(raw.parse()?),
        }
    }

    pub fn describe_scheme(
        &self,
        setting: Option<&str>,
    ) -> Result<SchemeDescription, CharacterCreationError> {
        let session = self.start_session(setting)?;
        Ok(SchemeDescription {
            setting: session.setting(),
            scheme: session.scheme().clone(),
            schema: session.schema().clone(),
            initial_assignment: session.assignment().clone(),
            alignment_descriptor: session.alignment_descriptor(),
        })
    }

    pub fn start_session(
        &self,
        setting: Option<&str>,
    ) -> Result<CreationSession, CharacterCreationError> {
        let setting = self.resolve_setting(setting)?;
        tracing::debug!(setting = %setting, "Starting character creation session");
        Ok(CreationSession::new(setting))
    }

    pub async fn create(
        &self,
        owner: UserId,
        input: CreateCharacterInput,
    ) -> Result<Character, CharacterCreationError> {
        let setting = self.resolve_setting(input.setting.as_deref())?;

        let validated = ValidatedCharacter::validate(setting, &input.values).inspect_err(|e| {
            tracing::warn!(
                owner = %owner,
                setting = %setting,
                fields = ?e.fields().collect::<Vec<_>>(),
                "Rejected character submission"
            );
        })?;

        if let Some(campaign_id) = validated.campaign_id() {
            let owned = self
                .campaigns
                .get(campaign_id)
                .await?
                .is_some_and(|campaign| campaign.is_owned_by(owner));
            if !owned {
                tracing::warn!(
                    owner = %owner,
                    campaign_id = %campaign_id,
                    "Campaign not available to owner"
                );
                return Err(CharacterCreationError::CampaignNotFound(campaign_id));
            }
        }

        let character = self
            .characters
            .create(owner, validated, self.clock.now())
            .await?;

        tracing::info!(
            character_id = %character.id(),
            owner = %owner,
            setting = %setting,
            "Character created"
        );
        Ok(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        MockCampaignRepo, MockCharacterRepo, MockClockPort, RepoError,
    };
    use chrono::{TimeZone, Utc};
    use tabletophub_domain::wizard::fields;
    use tabletophub_domain::{
        AllocationError, AttributeKey, Campaign, CampaignName, SheetValue, ValidationReason,
    };

    fn complete_values(setting: GameSetting) -> SheetValues {
        let mut session = CreationSession::new(setting);
        session.set_field(fields::NAME, "Ilsa Varn");
        session.set_field(fields::BIRTH_VECTOR, "Orbital");
        session.set_field(fields::POINT_OF_ORIGIN, "Kessel Reach");
        session.set_field(fields::FACTION, "Free Traders");
        session.set_field(fields::EDICT, "Leave no one behind");
        session.values()
    }

    fn clock() -> MockClockPort {
        let now = Utc.with_ymd_and_hms(2026, 5, 4, 9, 0, 0).unwrap();
        let mut clock = MockClockPort::new();
        clock.expect_now().returning(move || now);
        clock
    }

    fn use_cases(
        characters: MockCharacterRepo,
        campaigns: MockCampaignRepo,
    ) -> CharacterCreationUseCases {
        CharacterCreationUseCases::new(
            Arc::new(characters),
            Arc::new(campaigns),
            Arc::new(clock()),
            GameSetting::ConflictHorizon,
        )
    }

    fn persisting_repo() -> MockCharacterRepo {
        let mut characters = MockCharacterRepo::new();
        characters
            .expect_create()
            .times(1)
            .returning(|owner, validated, at| Ok(Character::create(owner, validated, at)));
        characters
    }

    #[tokio::test]
    async fn omitted_setting_creates_in_default_setting() {
        let owner = UserId::new();
        let use_case = use_cases(persisting_repo(), MockCampaignRepo::new());

        let character = use_case
            .create(
                owner,
                CreateCharacterInput {
                    setting: None,
                    values: complete_values(GameSetting::ConflictHorizon),
                },
            )
            .await
            .unwrap();

        assert_eq!(character.setting(), GameSetting::ConflictHorizon);
        assert_eq!(character.owner_id(), owner);
        assert_eq!(character.name().as_str(), "Ilsa Varn");
        assert_eq!(
            character.created_at(),
            Utc.with_ymd_and_hms(2026, 5, 4, 9, 0, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn unknown_or_blank_setting_never_reaches_storage() {
        let use_case = use_cases(MockCharacterRepo::new(), MockCampaignRepo::new());

        for setting in ["Atlantis", "  "] {
            let err = use_case
                .create(
                    UserId::new(),
                    CreateCharacterInput {
                        setting: Some(setting.to_string()),
                        values: complete_values(GameSetting::ConflictHorizon),
                    },
                )
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                CharacterCreationError::Setting(AllocationError::UnknownSetting(_))
            ));
        }
    }

    #[tokio::test]
    async fn tampered_opposed_pair_fails_full_validation() {
        let mut characters = MockCharacterRepo::new();
        characters.expect_create().never();
        let mut campaigns = MockCampaignRepo::new();
        campaigns.expect_get().never();
        let use_case = use_cases(characters, campaigns);
        let mut values = complete_values(GameSetting::ConflictHorizon);
        values.insert(AttributeKey::Katra.to_string(), SheetValue::Integer(15));
        values.insert(AttributeKey::Imperius.to_string(), SheetValue::Integer(10));

        let err = use_case
            .create(
                UserId::new(),
                CreateCharacterInput {
                    setting: Some("Conflict Horizon".to_string()),
                    values,
                },
            )
            .await
            .unwrap_err();

        let CharacterCreationError::Validation(failure) = err else {
            panic!("expected validation failure, got {err:?}");
        };
        assert_eq!(failure.errors.len(), 1);
        assert_eq!(failure.errors[0].field, "imperius");
        assert_eq!(
            failure.errors[0].reason,
            ValidationReason::SumMismatch {
                partner: AttributeKey::Katra,
                total: 20,
            }
        );
        assert_eq!(
            failure.to_string(),
            "Submission failed full validation: 1 invalid field(s)"
        );
    }

    #[tokio::test]
    async fn missing_name_is_reported_per_field() {
        let use_case = use_cases(MockCharacterRepo::new(), MockCampaignRepo::new());
        let mut values = complete_values(GameSetting::HarrowingTruth);
        values.remove(fields::NAME);

        let err = use_case
            .create(
                UserId::new(),
                CreateCharacterInput {
                    setting: Some("harrowing_truth".to_string()),
                    values,
                },
            )
            .await
            .unwrap_err();

        let CharacterCreationError::Validation(failure) = err else {
            panic!("expected validation failure, got {err:?}");
        };
        assert_eq!(failure.fields().collect::<Vec<_>>(), vec![fields::NAME]);
    }

    #[tokio::test]
    async fn campaign_of_another_owner_is_not_found() {
        let owner = UserId::new();
        let campaign = Campaign::new(
            UserId::new(),
            CampaignName::new("Someone Else's").unwrap(),
            GameSetting::ConflictHorizon,
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        );
        let campaign_id = campaign.id();

        let mut campaigns = MockCampaignRepo::new();
        campaigns
            .expect_get()
            .withf(move |id| *id == campaign_id)
            .returning(move |_| Ok(Some(campaign.clone())));

        let use_case = use_cases(MockCharacterRepo::new(), campaigns);
        let mut values = complete_values(GameSetting::ConflictHorizon);
        values.insert(
            fields::CAMPAIGN_ID.to_string(),
            SheetValue::String(campaign_id.to_string()),
        );

        let err = use_case
            .create(owner, CreateCharacterInput { setting: None, values })
            .await
            .unwrap_err();
        assert!(matches!(err, CharacterCreationError::CampaignNotFound(id) if id == campaign_id));
    }

    #[tokio::test]
    async fn owned_campaign_is_attached() {
        let owner = UserId::new();
        let campaign = Campaign::new(
            owner,
            CampaignName::new("Long Night").unwrap(),
            GameSetting::ConflictHorizon,
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        );
        let campaign_id = campaign.id();

        let mut campaigns = MockCampaignRepo::new();
        campaigns
            .expect_get()
            .returning(move |_| Ok(Some(campaign.clone())));

        let use_case = use_cases(persisting_repo(), campaigns);
        let mut values = complete_values(GameSetting::ConflictHorizon);
        values.insert(
            fields::CAMPAIGN_ID.to_string(),
            SheetValue::String(campaign_id.to_string()),
        );

        let character = use_case
            .create(owner, CreateCharacterInput { setting: None, values })
            .await
            .unwrap();
        assert_eq!(character.campaign_id(), Some(campaign_id));
    }

    #[tokio::test]
    async fn duplicate_name_surfaces_repo_error() {
        let mut characters = MockCharacterRepo::new();
        characters
            .expect_create()
            .returning(|_, _, _| Err(RepoError::unique("name taken")));
        let use_case = use_cases(characters, MockCampaignRepo::new());

        let err = use_case
            .create(
                UserId::new(),
                CreateCharacterInput {
                    setting: None,
                    values: complete_values(GameSetting::ConflictHorizon),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CharacterCreationError::Repo(e) if e.is_constraint()));
    }

    #[test]
    fn describe_scheme_starts_from_initial_assignment() {
        let use_case = use_cases(MockCharacterRepo::new(), MockCampaignRepo::new());
        let description = use_case.describe_scheme(None).unwrap();

        assert_eq!(description.setting, GameSetting::ConflictHorizon);
        assert_eq!(
            description.initial_assignment,
            AttributeAssignment::initialize(&description.scheme)
        );
        assert!(description.scheme.violations(&description.initial_assignment).is_empty());
        assert_eq!(description.alignment_descriptor.as_deref(), Some("Neutral"));
    }

    #[test]
    fn session_uses_requested_setting() {
        let use_case = use_cases(MockCharacterRepo::new(), MockCampaignRepo::new());
        let session = use_case.start_session(Some("Planet of the Song")).unwrap();
        assert_eq!(session.setting(), GameSetting::PlanetOfTheSong);
        assert!(session.alignment_descriptor().is_none());
    }
}
