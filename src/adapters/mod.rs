//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - sqlx-backed persistence
//! - `memory` - in-memory stores for tests and database-free runs
//! - `consent` - file-backed consent decision
//! - `http` - axum REST surface

pub mod consent;
pub mod http;
pub mod memory;
pub mod postgres;

pub use consent::FileConsentStore;
pub use memory::{
    InMemoryAnalyticsStore, InMemoryConsentStore, InMemoryLessonContent,
    InMemoryProgressRepository, InMemoryVariantRepository,
};
