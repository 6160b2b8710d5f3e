//! Attribute allocation engine: keys, schemes, assignments and slider mutations.

mod allocation;
mod assignment;
mod error;
mod key;
mod scheme;

pub use allocation::AlignmentScore;
pub use assignment::AttributeAssignment;
pub use error::AllocationError;
pub use key::AttributeKey;
pub use scheme::{
    AlignmentRole, AlignmentRule, AllocationKind, AttributeRange, AttributeScheme, AttributeSlot,
    OpposedPair, SchemeViolation,
};
