use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The universal attribute keys shared by every game setting.
///
/// Settings differ in which keys they use and how they are allocated, never in the
/// key names themselves; display labels come from the setting's scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKey {
    Katra,
    Dominion,
    Imperius,
    Harmonia,
    Gnosis,
    Entropy,
}

impl AttributeKey {
    pub const ALL: [AttributeKey; 6] = [
        AttributeKey::Katra,
        AttributeKey::Dominion,
        AttributeKey::Imperius,
        AttributeKey::Harmonia,
        AttributeKey::Gnosis,
        AttributeKey::Entropy,
    ];

    /// Wire/field name of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKey::Katra => "katra",
            AttributeKey::Dominion => "dominion",
            AttributeKey::Imperius => "imperius",
            AttributeKey::Harmonia => "harmonia",
            AttributeKey::Gnosis => "gnosis",
            AttributeKey::Entropy => "entropy",
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttributeKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown attribute key: {}", s)))
    }
}
