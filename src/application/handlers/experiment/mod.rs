//! A/B experiment handlers.

mod assign_variant;
mod create_variant;
mod get_variant_results;

pub use assign_variant::{AssignVariantHandler, AssignVariantQuery};
pub use create_variant::CreateVariantHandler;
pub use get_variant_results::{GetVariantResultsHandler, GetVariantResultsQuery};
