//! Request and response bodies for experiment endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::analytics::{AbTestVariant, NewVariant};
use crate::domain::foundation::ElementId;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateVariantRequest {
    pub name: String,
    #[serde(default)]
    pub configuration: Option<Value>,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl CreateVariantRequest {
    pub fn into_new_variant(self, element_id: ElementId) -> NewVariant {
        NewVariant {
            element_id,
            name: self.name,
            configuration: self
                .configuration
                .unwrap_or_else(|| Value::Object(Default::default())),
            weight: self.weight,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VariantResponse {
    pub variant_id: String,
    pub element_id: ElementId,
    pub name: String,
    pub configuration: Value,
    pub weight: f64,
    pub is_active: bool,
}

impl From<AbTestVariant> for VariantResponse {
    fn from(variant: AbTestVariant) -> Self {
        Self {
            variant_id: variant.id.to_string(),
            element_id: variant.element_id,
            name: variant.name,
            configuration: variant.configuration,
            weight: variant.weight,
            is_active: variant.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn weight_defaults_to_one() {
        let request: CreateVariantRequest =
            serde_json::from_value(json!({ "name": "Control" })).unwrap();
        let variant = request.into_new_variant(ElementId::new(99));
        assert_eq!(variant.weight, 1.0);
        assert_eq!(variant.configuration, json!({}));
    }
}
