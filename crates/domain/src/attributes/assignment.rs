use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{AllocationKind, AttributeKey, AttributeScheme};

/// Attribute values for one character, keyed by universal attribute key.
///
/// Values are only changed through the allocation operations, each of which returns a
/// fresh assignment. Callers never see one half of a coupled update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeAssignment {
    values: BTreeMap<AttributeKey, i32>,
}

impl AttributeAssignment {
    /// Scheme defaults: independent keys at their midpoint, opposed pairs split evenly
    /// with the odd point going to the first-declared key, alignment keys at zero.
    pub fn initialize(scheme: &AttributeScheme) -> Self {
        let values = scheme
            .slots()
            .iter()
            .map(|slot| {
                let value = match slot.kind {
                    AllocationKind::Independent { .. } => slot.kind.range().midpoint(),
                    AllocationKind::Opposed { total, .. } => {
                        let is_first = scheme
                            .pair_for(slot.key)
                            .is_some_and(|pair| pair.first == slot.key);
                        if is_first {
                            total - total / 2
                        } else {
                            total / 2
                        }
                    }
                    AllocationKind::Aligned { .. } => 0,
                };
                (slot.key, value)
            })
            .collect();
        Self { values }
    }

    /// Builds an assignment from arbitrary values without checking any scheme.
    ///
    /// Used when reading stored or client-supplied data; run
    /// [`AttributeScheme::violations`] before trusting the result.
    pub fn from_raw(values: impl IntoIterator<Item = (AttributeKey, i32)>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn get(&self, key: AttributeKey) -> Option<i32> {
        self.values.get(&key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, i32)> + '_ {
        self.values.iter().map(|(key, value)| (*key, *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy with the given keys overwritten in one step.
    pub(crate) fn with_values(&self, updates: &[(AttributeKey, i32)]) -> Self {
        let mut values = self.values.clone();
        for (key, value) in updates {
            values.insert(*key, *value);
        }
        Self { values }
    }
}
