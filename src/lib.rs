//! Lyra Mentor - lesson sequencing and interaction analytics
//!
//! Merges a lesson's narrative content blocks and interactive elements into
//! one presentation order, records learner interaction telemetry in batches,
//! and serves A/B variants and engagement dashboards.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
