//! Aggregate roots - the stored records
//!
//! Each aggregate:
//! - Has a unique identity and a single owner
//! - Keeps its fields private and exposes accessors
//! - Is built from already-validated inputs (`ValidatedCharacter`, name newtypes)

pub mod campaign;
pub mod character;
pub mod document;

pub use campaign::Campaign;
pub use character::{Character, CharacterOrigin};
pub use document::Document;
