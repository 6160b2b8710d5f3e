//! Attribute schemes: the per-setting description of which attributes exist and how
//! they are allocated.
//!
//! A scheme is derived from a `GameSetting`, never stored. It is plain data so the
//! resolver stays a table lookup and clients can render sliders straight from it.

use serde::{Deserialize, Serialize};

use super::{AlignmentScore, AttributeAssignment, AttributeKey};
use crate::game_settings::GameSetting;

// =============================================================================
// Building blocks
// =============================================================================

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRange {
    pub min: i32,
    pub max: i32,
}

impl AttributeRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Midpoint, rounded toward `min` when the span is odd.
    pub fn midpoint(&self) -> i32 {
        (self.min + self.max).div_euclid(2)
    }
}

/// Two attributes whose values always sum to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpposedPair {
    pub first: AttributeKey,
    pub second: AttributeKey,
    pub total: i32,
}

impl OpposedPair {
    pub const fn new(first: AttributeKey, second: AttributeKey, total: i32) -> Self {
        Self {
            first,
            second,
            total,
        }
    }

    pub fn contains(&self, key: AttributeKey) -> bool {
        self.first == key || self.second == key
    }

    /// The other member of the pair, if `key` is a member.
    pub fn counterpart_of(&self, key: AttributeKey) -> Option<AttributeKey> {
        if key == self.first {
            Some(self.second)
        } else if key == self.second {
            Some(self.first)
        } else {
            None
        }
    }

    /// Legal range for either member: each side keeps at least one point.
    pub fn member_range(&self) -> AttributeRange {
        AttributeRange::new(1, self.total - 1)
    }
}

/// One key's value fixes another's as its arithmetic inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentRule {
    pub driver: AttributeKey,
    pub derived: AttributeKey,
}

impl AlignmentRule {
    pub const fn new(driver: AttributeKey, derived: AttributeKey) -> Self {
        Self { driver, derived }
    }

    pub fn range(&self) -> AttributeRange {
        AttributeRange::new(AlignmentScore::MIN, AlignmentScore::MAX)
    }

    /// Value of the derived key for a given driver score.
    pub fn derive(&self, driver: AlignmentScore) -> i32 {
        -driver.value()
    }

    /// True when `derived_value` is exactly the inverse of `driver_value`.
    pub fn is_inverse(&self, driver_value: i32, derived_value: i32) -> bool {
        driver_value.checked_neg() == Some(derived_value)
    }
}

/// Role of a key within the alignment rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentRole {
    Driver,
    Derived,
}

/// How a single key is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AllocationKind {
    /// Bounded on its own.
    Independent { min: i32, max: i32 },
    /// Member of an opposed pair summing to `total`.
    Opposed { partner: AttributeKey, total: i32 },
    /// Member of the alignment axis; `counterpart` is always its inverse.
    Aligned {
        role: AlignmentRole,
        counterpart: AttributeKey,
    },
}

impl AllocationKind {
    /// Bounds a single value of this kind must respect.
    pub fn range(&self) -> AttributeRange {
        match self {
            AllocationKind::Independent { min, max } => AttributeRange::new(*min, *max),
            AllocationKind::Opposed { total, .. } => AttributeRange::new(1, total - 1),
            AllocationKind::Aligned { .. } => {
                AttributeRange::new(AlignmentScore::MIN, AlignmentScore::MAX)
            }
        }
    }
}

/// A key in play, with its setting-specific label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSlot {
    pub key: AttributeKey,
    pub label: String,
    pub kind: AllocationKind,
}

/// A breach of an assignment invariant, as found by [`AttributeScheme::violations`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum SchemeViolation {
    Missing { key: AttributeKey },
    Unexpected { key: AttributeKey },
    OutOfRange {
        key: AttributeKey,
        value: i32,
        range: AttributeRange,
    },
    SumMismatch { pair: OpposedPair, actual: i32 },
    NotInverse {
        driver: AttributeKey,
        derived: AttributeKey,
        driver_value: i32,
        derived_value: i32,
    },
}

// =============================================================================
// Scheme
// =============================================================================

/// The allocation rules for one game setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeScheme {
    setting: GameSetting,
    title: String,
    description: String,
    slots: Vec<AttributeSlot>,
    opposed_pairs: Vec<OpposedPair>,
    alignment: Option<AlignmentRule>,
}

impl AttributeScheme {
    pub(crate) fn new(
        setting: GameSetting,
        title: impl Into<String>,
        description: impl Into<String>,
        slots: Vec<AttributeSlot>,
        opposed_pairs: Vec<OpposedPair>,
        alignment: Option<AlignmentRule>,
    ) -> Self {
        Self {
            setting,
            title: title.into(),
            description: description.into(),
            slots,
            opposed_pairs,
            alignment,
        }
    }

    pub fn setting(&self) -> GameSetting {
        self.setting
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Keys in play, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = AttributeKey> + '_ {
        self.slots.iter().map(|slot| slot.key)
    }

    pub fn slots(&self) -> &[AttributeSlot] {
        &self.slots
    }

    pub fn slot(&self, key: AttributeKey) -> Option<&AttributeSlot> {
        self.slots.iter().find(|slot| slot.key == key)
    }

    pub fn contains(&self, key: AttributeKey) -> bool {
        self.slot(key).is_some()
    }

    pub fn kind(&self, key: AttributeKey) -> Option<AllocationKind> {
        self.slot(key).map(|slot| slot.kind)
    }

    pub fn label(&self, key: AttributeKey) -> Option<&str> {
        self.slot(key).map(|slot| slot.label.as_str())
    }

    pub fn opposed_pairs(&self) -> &[OpposedPair] {
        &self.opposed_pairs
    }

    /// The opposed pair `key` belongs to, if any.
    pub fn pair_for(&self, key: AttributeKey) -> Option<&OpposedPair> {
        self.opposed_pairs.iter().find(|pair| pair.contains(key))
    }

    pub fn alignment(&self) -> Option<&AlignmentRule> {
        self.alignment.as_ref()
    }

    /// Every invariant the assignment breaks under this scheme. Empty means valid.
    pub fn violations(&self, assignment: &AttributeAssignment) -> Vec<SchemeViolation> {
        let mut found = Vec::new();

        for slot in &self.slots {
            match assignment.get(slot.key) {
                None => found.push(SchemeViolation::Missing { key: slot.key }),
                Some(value) => {
                    let range = slot.kind.range();
                    if !range.contains(value) {
                        found.push(SchemeViolation::OutOfRange {
                            key: slot.key,
                            value,
                            range,
                        });
                    }
                }
            }
        }

        for (key, _) in assignment.iter() {
            if !self.contains(key) {
                found.push(SchemeViolation::Unexpected { key });
            }
        }

        for pair in &self.opposed_pairs {
            if let (Some(a), Some(b)) = (assignment.get(pair.first), assignment.get(pair.second)) {
                if a.checked_add(b) != Some(pair.total) {
                    found.push(SchemeViolation::SumMismatch {
                        pair: *pair,
                        actual: a.saturating_add(b),
                    });
                }
            }
        }

        if let Some(rule) = &self.alignment {
            if let (Some(driver_value), Some(derived_value)) =
                (assignment.get(rule.driver), assignment.get(rule.derived))
            {
                if !rule.is_inverse(driver_value, derived_value) {
                    found.push(SchemeViolation::NotInverse {
                        driver: rule.driver,
                        derived: rule.derived,
                        driver_value,
                        derived_value,
                    });
                }
            }
        }

        found
    }

    /// Human-readable position on the alignment axis ("+37 Gnosis", "-12 Entropy", "Neutral").
    ///
    /// `None` when the scheme has no alignment rule or the driver is unset.
    pub fn alignment_descriptor(&self, assignment: &AttributeAssignment) -> Option<String> {
        let rule = self.alignment.as_ref()?;
        let score = assignment.get(rule.driver)?;
        let name = |key: AttributeKey| {
            let label = self.label(key).unwrap_or(key.as_str());
            label.split_whitespace().next().unwrap_or(label).to_string()
        };
        Some(match score {
            s if s > 0 => format!("+{} {}", s, name(rule.driver)),
            s if s < 0 => format!("{} {}", s, name(rule.derived)),
            _ => "Neutral".to_string(),
        })
    }
}
