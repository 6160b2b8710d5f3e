//! Stored character records: listing, lookup and deletion for the owning user.

mod error;

use std::sync::Arc;

use tabletophub_domain::{Character, CharacterId, GameSetting, UserId};

use crate::infrastructure::ports::{CharacterRepo, RepoError};

pub use error::CharacterError;

pub struct CharacterUseCases {
    characters: Arc<dyn CharacterRepo>,
}

impl CharacterUseCases {
    pub fn new(characters: Arc<dyn CharacterRepo>) -> Self {
        Self { characters }
    }

    /// Newest first, optionally narrowed to one setting.
    pub async fn list(
        &self,
        owner: UserId,
        setting: Option<GameSetting>,
    ) -> Result<Vec<Character>, CharacterError> {
        let characters = self.characters.list_for_owner(owner, setting).await?;
        tracing::debug!(
            owner = %owner,
            setting = ?setting,
            count = characters.len(),
            "Listed characters"
        );
        Ok(characters)
    }

    pub async fn get(&self, owner: UserId, id: CharacterId) -> Result<Character, CharacterError> {
        self.characters
            .get(id)
            .await?
            .filter(|character| character.is_owned_by(owner))
            .ok_or(CharacterError::NotFound(id))
    }

    pub async fn delete(&self, owner: UserId, id: CharacterId) -> Result<(), CharacterError> {
        self.get(owner, id).await?;
        self.characters.delete(id).await.map_err(|e| match e {
            RepoError::NotFound { .. } => CharacterError::NotFound(id),
            other => other.into(),
        })?;
        tracing::info!(character_id = %id, owner = %owner, "Character deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockCharacterRepo;
    use chrono::{TimeZone, Utc};
    use tabletophub_domain::wizard::fields;
    use tabletophub_domain::CreationSession;

    fn stored(owner: UserId) -> Character {
        let mut session = CreationSession::new(GameSetting::PlanetOfTheSong);
        session.set_field(fields::NAME, "Oru");
        for field in [
            fields::BIRTH_VECTOR,
            fields::POINT_OF_ORIGIN,
            fields::FACTION,
            fields::EDICT,
        ] {
            session.set_field(field, "Choir");
        }
        let validated = session.finalize().unwrap();
        Character::create(
            owner,
            validated,
            Utc.with_ymd_and_hms(2026, 2, 2, 2, 2, 2).unwrap(),
        )
    }

    #[tokio::test]
    async fn list_passes_setting_filter_through() {
        let owner = UserId::new();
        let character = stored(owner);
        let mut repo = MockCharacterRepo::new();
        repo.expect_list_for_owner()
            .withf(move |o, s| *o == owner && *s == Some(GameSetting::PlanetOfTheSong))
            .returning(move |_, _| Ok(vec![character.clone()]));

        let use_case = CharacterUseCases::new(Arc::new(repo));
        let listed = use_case
            .list(owner, Some(GameSetting::PlanetOfTheSong))
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn get_hides_other_owners_characters() {
        let owner = UserId::new();
        let character = stored(UserId::new());
        let id = character.id();
        let mut repo = MockCharacterRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Some(character.clone())));

        let use_case = CharacterUseCases::new(Arc::new(repo));
        let err = use_case.get(owner, id).await.unwrap_err();
        assert!(matches!(err, CharacterError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn delete_checks_ownership_before_removing() {
        let owner = UserId::new();
        let character = stored(UserId::new());
        let id = character.id();
        let mut repo = MockCharacterRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Some(character.clone())));
        repo.expect_delete().never();

        let use_case = CharacterUseCases::new(Arc::new(repo));
        assert!(use_case.delete(owner, id).await.is_err());
    }

    #[tokio::test]
    async fn delete_removes_owned_character() {
        let owner = UserId::new();
        let character = stored(owner);
        let id = character.id();
        let mut repo = MockCharacterRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Some(character.clone())));
        repo.expect_delete()
            .withf(move |deleted| *deleted == id)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CharacterUseCases::new(Arc::new(repo));
        use_case.delete(owner, id).await.unwrap();
    }
}
