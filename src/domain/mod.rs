//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, clock, errors)
//! - `lesson` - Content blocks, interactive elements, sequencing and scoring
//! - `analytics` - Interaction events, experiments and aggregate read-back

pub mod analytics;
pub mod foundation;
pub mod lesson;
