//! Core domain for the tabletop hub: game settings, the attribute allocation engine,
//! the character creation wizard and the stored records.
//!
//! Everything here is synchronous and free of I/O.

pub mod aggregates;
pub mod attributes;
pub mod error;
pub mod game_settings;
pub mod ids;
pub mod types;
pub mod value_objects;
pub mod wizard;

pub use aggregates::{Campaign, Character, CharacterOrigin, Document};

pub use attributes::{
    AlignmentRole, AlignmentRule, AlignmentScore, AllocationError, AllocationKind,
    AttributeAssignment, AttributeKey, AttributeRange, AttributeScheme, AttributeSlot,
    OpposedPair, SchemeViolation,
};

pub use error::DomainError;

pub use game_settings::{resolve_scheme, resolve_scheme_id, GameSetting};

pub use ids::{CampaignId, CharacterId, DocumentId, UserId};

pub use types::{SheetValue, SheetValues};

pub use value_objects::{CampaignName, CharacterName, DocumentName, MAX_NAME_LENGTH};

pub use wizard::{
    validate_all, validate_step, CharacterSchema, CreationSession, FieldError, FieldKind,
    FieldRule, FinalValidationFailure, StepSchema, StepValidationFailure, ValidatedCharacter,
    ValidationReason, ValidationResult, WizardStep,
};
