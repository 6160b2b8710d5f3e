//! Value objects - Immutable objects defined by their attributes

mod names;

pub use names::{CampaignName, CharacterName, DocumentName, MAX_NAME_LENGTH};
