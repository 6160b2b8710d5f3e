//! Character creation wizard: per-step schemas, validation, sessions and the
//! validated submission.

mod error;
mod session;
mod step;
mod submission;
mod validation;

pub use error::{FinalValidationFailure, StepValidationFailure};
pub use session::CreationSession;
pub use step::{
    fields, CharacterSchema, CrossFieldRule, FieldKind, FieldRule, StepSchema, ValueType,
    WizardStep, MAX_NOTES_LENGTH, MAX_ORIGIN_LENGTH,
};
pub use submission::ValidatedCharacter;
pub use validation::{validate_all, validate_step, FieldError, ValidationReason, ValidationResult};
