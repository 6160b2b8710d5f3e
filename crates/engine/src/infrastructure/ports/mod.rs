//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Record storage (in-memory today, a relational store behind the same traits later)
//! - Document upload authorization (object storage)
//! - Clock (for testing)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{CampaignRepo, CharacterRepo, DocumentRepo};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{UploadAuthorization, UploadAuthorizer};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockCampaignRepo, MockCharacterRepo, MockDocumentRepo};

#[cfg(test)]
pub use external::MockUploadAuthorizer;

#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::{RepoError, UploadError};
