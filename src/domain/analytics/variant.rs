//! A/B test variants and weighted assignment.

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{ElementId, ValidationError, VariantId};

/// One configuration alternative of an experiment on an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbTestVariant {
    pub id: VariantId,
    pub element_id: ElementId,
    pub name: String,
    pub configuration: Value,
    pub weight: f64,
    pub is_active: bool,
}

/// Request to add a variant to an element's experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVariant {
    pub element_id: ElementId,
    pub name: String,
    pub configuration: Value,
    pub weight: f64,
}

impl NewVariant {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if !self.weight.is_finite() {
            return Err(ValidationError::invalid_format("weight", "must be a finite number"));
        }
        if self.weight < 0.0 {
            return Err(ValidationError::invalid_format("weight", "must not be negative"));
        }
        Ok(())
    }

    /// Validates and assigns an id. New variants start active.
    pub fn into_variant(self, id: VariantId) -> Result<AbTestVariant, ValidationError> {
        self.validate()?;
        Ok(AbTestVariant {
            id,
            element_id: self.element_id,
            name: self.name.trim().to_string(),
            configuration: self.configuration,
            weight: self.weight,
            is_active: true,
        })
    }
}

fn usable_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}

/// Picks a variant with probability proportional to its weight.
///
/// Draws uniformly in `[0, total)` and walks the list subtracting weights
/// until the remainder is non-positive. A zero total, or a walk that runs
/// off the end through rounding, falls back to the first variant. Only an
/// empty slice yields `None`.
pub fn select_variant<'a, R: Rng + ?Sized>(
    variants: &'a [AbTestVariant],
    rng: &mut R,
) -> Option<&'a AbTestVariant> {
    let first = variants.first()?;
    let total: f64 = variants.iter().map(|v| usable_weight(v.weight)).sum();
    if total <= 0.0 || !total.is_finite() {
        return Some(first);
    }

    let mut remaining = rng.gen_range(0.0..total);
    for variant in variants {
        remaining -= usable_weight(variant.weight);
        if remaining <= 0.0 {
            return Some(variant);
        }
    }
    Some(first)
}
