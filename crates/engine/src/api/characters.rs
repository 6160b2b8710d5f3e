use serde::Serialize;
use tabletophub_domain::{Character, GameSetting, UserId};
use tabletophub_shared::{CharacterRequest, ErrorCode, ResponseResult};

use super::{parse_id, repo_error_response};
use crate::app::App;
use crate::use_cases::{CharacterCreationError, CharacterError, CreateCharacterInput};

/// Stored character plus its display-only alignment descriptor.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CharacterView<'a> {
    #[serde(flatten)]
    character: &'a Character,
    #[serde(skip_serializing_if = "Option::is_none")]
    alignment_descriptor: Option<String>,
}

impl<'a> CharacterView<'a> {
    fn new(character: &'a Character) -> Self {
        Self {
            character,
            alignment_descriptor: character.alignment_descriptor(),
        }
    }
}

pub(super) async fn handle_character_request(
    app: &App,
    owner: UserId,
    request: CharacterRequest,
) -> ResponseResult {
    tracing::debug!(owner = %owner, request_type = ?request, "Handling character request");

    match request {
        CharacterRequest::DescribeScheme { setting } => {
            match app.use_cases.creation.describe_scheme(setting.as_deref()) {
                Ok(description) => ResponseResult::success(description),
                Err(e) => creation_error_response(e),
            }
        }

        CharacterRequest::ListCharacters { setting } => {
            let setting = match setting.as_deref().map(str::parse::<GameSetting>).transpose() {
                Ok(setting) => setting,
                Err(e) => return ResponseResult::error(ErrorCode::BadRequest, e.to_string()),
            };
            match app.use_cases.character.list(owner, setting).await {
                Ok(characters) => ResponseResult::success(
                    characters.iter().map(CharacterView::new).collect::<Vec<_>>(),
                ),
                Err(e) => character_error_response(e, "list characters"),
            }
        }

        CharacterRequest::GetCharacter { character_id } => {
            let id = match parse_id(&character_id, "character") {
                Ok(id) => id,
                Err(response) => return response,
            };
            match app.use_cases.character.get(owner, id).await {
                Ok(character) => ResponseResult::success(CharacterView::new(&character)),
                Err(e) => character_error_response(e, "get character"),
            }
        }

        CharacterRequest::CreateCharacter { data } => {
            let values = match data.sheet_values() {
                Ok(values) => values,
                Err(e) => return ResponseResult::error(ErrorCode::BadRequest, e.to_string()),
            };
            let input = CreateCharacterInput {
                setting: data.setting,
                values,
            };
            match app.use_cases.creation.create(owner, input).await {
                Ok(character) => ResponseResult::success(CharacterView::new(&character)),
                Err(e) => creation_error_response(e),
            }
        }

        CharacterRequest::DeleteCharacter { character_id } => {
            let id = match parse_id(&character_id, "character") {
                Ok(id) => id,
                Err(response) => return response,
            };
            match app.use_cases.character.delete(owner, id).await {
                Ok(()) => ResponseResult::success_empty(),
                Err(e) => character_error_response(e, "delete character"),
            }
        }
    }
}

fn creation_error_response(error: CharacterCreationError) -> ResponseResult {
    match error {
        CharacterCreationError::Setting(e) => {
            ResponseResult::error(ErrorCode::BadRequest, e.to_string())
        }
        CharacterCreationError::Validation(failure) => {
            let message = failure.to_string();
            ResponseResult::error_with_details(ErrorCode::ValidationError, message, failure.errors)
        }
        CharacterCreationError::CampaignNotFound(_) => {
            ResponseResult::error(ErrorCode::NotFound, "Campaign not found")
        }
        CharacterCreationError::Repo(e) => repo_error_response(&e, "create character"),
    }
}

fn character_error_response(error: CharacterError, operation: &str) -> ResponseResult {
    match error {
        CharacterError::NotFound(_) => {
            ResponseResult::error(ErrorCode::NotFound, "Character not found")
        }
        CharacterError::Repo(e) => repo_error_response(&e, operation),
    }
}
