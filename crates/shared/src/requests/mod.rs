//! Request payloads for the transport collaborator
//!
//! Requests are grouped by the record they act on. The authenticated user is supplied
//! by the transport alongside the payload, never inside it.

mod character;
mod document;

use serde::{Deserialize, Serialize};

pub use character::{CharacterRequest, CreateCharacterData, NonScalarField};
pub use document::{DocumentRequest, RequestUploadData};

/// Top-level request envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "group", content = "request", rename_all = "snake_case")]
pub enum RequestPayload {
    Character(CharacterRequest),
    Document(DocumentRequest),
}
