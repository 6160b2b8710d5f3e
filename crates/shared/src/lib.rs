//! Tabletop Hub Protocol - wire types for the transport collaborator
//!
//! This crate contains the request and response shapes exchanged with whatever
//! transport fronts the engine:
//! - Request payloads grouped by record (characters, documents)
//! - `ResponseResult` and `ErrorCode`
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and the domain vocabulary
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain IDs on the wire** - ids travel as strings and are parsed by the engine

pub mod requests;
pub mod responses;

pub use requests::{
    CharacterRequest, CreateCharacterData, DocumentRequest, NonScalarField, RequestPayload,
    RequestUploadData,
};
pub use responses::{ErrorCode, ResponseResult, UploadTicket};
