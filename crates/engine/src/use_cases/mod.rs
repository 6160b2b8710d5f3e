//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate the domain and the ports to fulfill user stories.

pub mod character;
pub mod character_creation;
pub mod documents;

// Re-export main types
pub use character::{CharacterError, CharacterUseCases};
pub use character_creation::{
    CharacterCreationError, CharacterCreationUseCases, CreateCharacterInput, SchemeDescription,
};
pub use documents::{DocumentError, DocumentUseCases, IssuedUpload};
