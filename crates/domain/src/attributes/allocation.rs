//! Slider mutations.
//!
//! Every operation takes the current assignment by reference and returns a new one.
//! A rejected change returns an error and leaves the caller's value as it was; nothing
//! is ever clamped into range.

use serde::{Deserialize, Serialize};

use super::{
    AlignmentRole, AlignmentRule, AllocationError, AllocationKind, AttributeAssignment,
    AttributeKey, AttributeRange, AttributeScheme, OpposedPair,
};

/// A position on the alignment axis, always within [-100, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct AlignmentScore(i32);

impl AlignmentScore {
    pub const MIN: i32 = -100;
    pub const MAX: i32 = 100;

    pub fn new(score: i32) -> Result<Self, AllocationError> {
        if (Self::MIN..=Self::MAX).contains(&score) {
            Ok(Self(score))
        } else {
            Err(AllocationError::AlignmentOutOfRange(score))
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for AlignmentScore {
    type Error = AllocationError;

    fn try_from(score: i32) -> Result<Self, Self::Error> {
        Self::new(score)
    }
}

impl From<AlignmentScore> for i32 {
    fn from(score: AlignmentScore) -> i32 {
        score.0
    }
}

impl AttributeAssignment {
    /// Moves one side of an opposed pair and rebalances the other.
    ///
    /// The counterpart becomes `total - proposed`; the change is accepted only if that
    /// lands in `[1, total - 1]`.
    pub fn apply_opposed_change(
        &self,
        pair: &OpposedPair,
        changed: AttributeKey,
        proposed: i32,
    ) -> Result<Self, AllocationError> {
        let counterpart_key = pair
            .counterpart_of(changed)
            .ok_or(AllocationError::KeyNotInPair {
                key: changed,
                first: pair.first,
                second: pair.second,
            })?;

        let counterpart = pair
            .total
            .checked_sub(proposed)
            .filter(|value| pair.member_range().contains(*value))
            .ok_or(AllocationError::InfeasibleOpposedValue {
                changed,
                proposed,
                counterpart_key,
                counterpart: pair.total.saturating_sub(proposed),
                total: pair.total,
            })?;

        Ok(self.with_values(&[(changed, proposed), (counterpart_key, counterpart)]))
    }

    /// Sets the alignment driver to `score` and the derived key to its inverse.
    pub fn apply_alignment_change(&self, rule: &AlignmentRule, score: AlignmentScore) -> Self {
        self.with_values(&[
            (rule.driver, score.value()),
            (rule.derived, rule.derive(score)),
        ])
    }

    /// Sets an independent attribute, rejecting values outside `range`.
    pub fn apply_independent_change(
        &self,
        key: AttributeKey,
        range: AttributeRange,
        value: i32,
    ) -> Result<Self, AllocationError> {
        if !range.contains(value) {
            return Err(AllocationError::OutOfRange {
                key,
                value,
                min: range.min,
                max: range.max,
            });
        }
        Ok(self.with_values(&[(key, value)]))
    }
}

impl AttributeScheme {
    /// Applies a single slider move, routed by the key's allocation kind.
    ///
    /// Moving the derived alignment key sets the driver to the inverse value.
    pub fn adjust(
        &self,
        assignment: &AttributeAssignment,
        key: AttributeKey,
        value: i32,
    ) -> Result<AttributeAssignment, AllocationError> {
        let kind = self.kind(key).ok_or(AllocationError::KeyNotInScheme {
            key,
            setting: self.setting(),
        })?;

        match kind {
            AllocationKind::Independent { min, max } => {
                assignment.apply_independent_change(key, AttributeRange::new(min, max), value)
            }
            AllocationKind::Opposed { partner, total } => {
                let pair = self
                    .pair_for(key)
                    .copied()
                    .unwrap_or(OpposedPair::new(key, partner, total));
                assignment.apply_opposed_change(&pair, key, value)
            }
            AllocationKind::Aligned { role, counterpart } => {
                let rule = self.alignment().copied().unwrap_or(match role {
                    AlignmentRole::Driver => AlignmentRule::new(key, counterpart),
                    AlignmentRole::Derived => AlignmentRule::new(counterpart, key),
                });
                let driver_value = match role {
                    AlignmentRole::Driver => value,
                    AlignmentRole::Derived => value
                        .checked_neg()
                        .ok_or(AllocationError::AlignmentOutOfRange(value))?,
                };
                let score = AlignmentScore::new(driver_value)?;
                Ok(assignment.apply_alignment_change(&rule, score))
            }
        }
    }
}
