//! Allocation errors.

use thiserror::Error;

use super::AttributeKey;
use crate::game_settings::GameSetting;

/// Why the allocation engine refused an operation.
///
/// Every rejection leaves the caller's assignment untouched; mutations take
/// `&AttributeAssignment` and only hand back a new value on success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// Scheme resolution was given a setting it does not know.
    #[error("Unknown game setting: '{0}'")]
    UnknownSetting(String),

    /// The proposed slider value leaves no valid counterpart for the opposed pair.
    #[error(
        "Cannot set {changed} to {proposed}: {counterpart_key} would become {counterpart}, outside [1, {}]",
        .total - 1
    )]
    InfeasibleOpposedValue {
        changed: AttributeKey,
        proposed: i32,
        counterpart_key: AttributeKey,
        counterpart: i32,
        total: i32,
    },

    /// The adjusted key is not one of the pair's two members.
    #[error("{key} is not part of the {first}/{second} opposed pair")]
    KeyNotInPair {
        key: AttributeKey,
        first: AttributeKey,
        second: AttributeKey,
    },

    /// The key is not used by the active setting.
    #[error("{key} is not used by the {setting} attribute scheme")]
    KeyNotInScheme {
        key: AttributeKey,
        setting: GameSetting,
    },

    /// An independent attribute was moved outside its declared range.
    #[error("{key} must be between {min} and {max}, got {value}")]
    OutOfRange {
        key: AttributeKey,
        value: i32,
        min: i32,
        max: i32,
    },

    /// An alignment score outside the alignment axis.
    #[error("Alignment score must be between -100 and 100, got {0}")]
    AlignmentOutOfRange(i32),
}

impl AllocationError {
    /// True for rejections the UI should surface as a no-op rather than a failure.
    pub fn is_rejected_change(&self) -> bool {
        matches!(
            self,
            AllocationError::InfeasibleOpposedValue { .. }
                | AllocationError::OutOfRange { .. }
                | AllocationError::AlignmentOutOfRange(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_not_in_scheme_names_setting() {
        let err = AllocationError::KeyNotInScheme {
            key: AttributeKey::Gnosis,
            setting: GameSetting::PlanetOfTheSong,
        };
        assert!(err.to_string().contains("Planet of the Song"));
        assert!(!err.is_rejected_change());
    }

    #[test]
    fn unknown_setting_quotes_the_name() {
        let err = AllocationError::UnknownSetting("Spelljammer".into());
        assert_eq!(err.to_string(), "Unknown game setting: 'Spelljammer'");
    }
}
