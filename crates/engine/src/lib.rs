//! Tabletop Hub Engine library.
//!
//! Server-side code around the attribute allocation engine.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration over the domain and the ports
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - Request dispatch from wire payloads to use cases
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
