use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use artifacts_basket::{OrderLine, OrderPayload};
use artifacts_core::{ArtifactId, Entity, TenantId};

use crate::form::ArtifactForm;

/// What the create form submits: the form fields plus the selected lines.
pub type NewArtifact = OrderPayload<ArtifactForm>;

/// A created artifact as acknowledged by the submission sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub artifact_id: ArtifactId,
    pub tenant_id: TenantId,
    pub name: String,
    pub artifact_product: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
}

impl Artifact {
    pub fn from_new(
        artifact_id: ArtifactId,
        tenant_id: TenantId,
        new: NewArtifact,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            artifact_id,
            tenant_id,
            name: new.fields.name,
            artifact_product: new.artifact_product,
            created_at,
        }
    }
}

impl Entity for Artifact {
    type Id = ArtifactId;

    fn id(&self) -> &Self::Id {
        &self.artifact_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artifacts_products::Price;

    #[test]
    fn new_artifact_serializes_name_beside_line_items() {
        let new = NewArtifact {
            fields: ArtifactForm::new("order1"),
            artifact_product: vec![OrderLine {
                product_id: "A".parse().unwrap(),
                price: Price::new(10),
                quantity: 2,
            }],
        };

        assert_eq!(
            serde_json::to_value(&new).unwrap(),
            serde_json::json!({
                "name": "order1",
                "artifactProduct": [{ "productId": "A", "price": 10, "quantity": 2 }]
            })
        );
    }

    #[test]
    fn new_artifact_deserializes_from_form_json() {
        let new: NewArtifact = serde_json::from_value(serde_json::json!({
            "name": "order1",
            "artifactProduct": []
        }))
        .unwrap();

        assert_eq!(new.fields.name, "order1");
        assert!(new.lines().is_empty());
    }
}
