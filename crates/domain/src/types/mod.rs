//! # Vocabulary types
//!
//! Shared vocabulary between the domain and the wire protocol.
//!
//! 1. **Pure data types** - No I/O, no async, no side effects
//! 2. **Serializable** - All types derive Serialize/Deserialize

// Character sheet types
pub mod character_sheet;
pub use character_sheet::{SheetValue, SheetValues};
