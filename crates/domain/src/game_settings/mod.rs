//! Game settings supported by the hub.
//!
//! Each setting maps to exactly one attribute scheme through the static table in
//! [`catalog`]. Adding a setting means adding a variant here and a row there.
//!
//! # Supported Settings
//!
//! - Harrowing Truth: six independent percentile attributes
//! - Planet of the Song: two opposed pairs
//! - Conflict Horizon: two opposed pairs plus the Gnosis/Entropy alignment axis (default)

mod catalog;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::attributes::{AllocationError, AttributeScheme};

pub use catalog::{resolve_scheme, resolve_scheme_id};

/// The rule system active for a character. Fixed once a creation session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameSetting {
    #[serde(rename = "Harrowing Truth", alias = "harrowing_truth")]
    HarrowingTruth,
    #[serde(rename = "Planet of the Song", alias = "planet_of_the_song")]
    PlanetOfTheSong,
    #[serde(rename = "Conflict Horizon", alias = "conflict_horizon")]
    ConflictHorizon,
}

impl GameSetting {
    /// Used when the caller omits the setting entirely.
    pub const DEFAULT: GameSetting = GameSetting::ConflictHorizon;

    pub const ALL: [GameSetting; 3] = [
        GameSetting::HarrowingTruth,
        GameSetting::PlanetOfTheSong,
        GameSetting::ConflictHorizon,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            GameSetting::HarrowingTruth => "harrowing_truth",
            GameSetting::PlanetOfTheSong => "planet_of_the_song",
            GameSetting::ConflictHorizon => "conflict_horizon",
        }
    }

    /// Name as stored on character records and shown to players.
    pub fn display_name(&self) -> &'static str {
        match self {
            GameSetting::HarrowingTruth => "Harrowing Truth",
            GameSetting::PlanetOfTheSong => "Planet of the Song",
            GameSetting::ConflictHorizon => "Conflict Horizon",
        }
    }

    /// Resolves optional caller input.
    ///
    /// Only a missing value falls back to [`GameSetting::DEFAULT`]; anything present
    /// must name a known setting, blank strings included.
    pub fn resolve(input: Option<&str>) -> Result<GameSetting, AllocationError> {
        match input {
            None => Ok(Self::DEFAULT),
            Some(raw) => raw.parse(),
        }
    }

    /// The attribute scheme for this setting.
    pub fn scheme(&self) -> AttributeScheme {
        resolve_scheme(*self)
    }
}

impl Default for GameSetting {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for GameSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for GameSetting {
    type Err = AllocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        GameSetting::ALL
            .into_iter()
            .find(|setting| {
                setting.id().eq_ignore_ascii_case(wanted)
                    || setting.display_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| AllocationError::UnknownSetting(s.to_string()))
    }
}
