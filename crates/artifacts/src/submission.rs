//! The artifact submission collaborator.

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;

use artifacts_core::{ArtifactId, TenantId};

use crate::artifact::{Artifact, NewArtifact};

/// A failed submission.
///
/// The message is the sink's own human-readable text and is shown to the
/// user unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("{0}")]
    Rejected(String),
}

impl SubmissionError {
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Rejected(msg) => msg,
        }
    }
}

/// Accepts new artifacts.
///
/// Single-shot: each call resolves once with the created artifact or an
/// error. No retries happen behind the caller's back.
#[async_trait]
pub trait ArtifactSubmission: Send + Sync {
    async fn create(&self, artifact: NewArtifact) -> Result<Artifact, SubmissionError>;
}

/// Tenant-scoped, in-memory artifact sink.
///
/// Assigns ids and creation times; keeps artifacts in creation order.
#[derive(Debug)]
pub struct InMemoryArtifactStore {
    tenant_id: TenantId,
    artifacts: Mutex<Vec<Artifact>>,
}

impl InMemoryArtifactStore {
    pub fn new(tenant_id: TenantId) -> Self {
        Self {
            tenant_id,
            artifacts: Mutex::new(Vec::new()),
        }
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub async fn list(&self) -> Vec<Artifact> {
        self.artifacts.lock().await.clone()
    }

    pub async fn get(&self, artifact_id: ArtifactId) -> Option<Artifact> {
        self.artifacts
            .lock()
            .await
            .iter()
            .find(|a| a.artifact_id == artifact_id)
            .cloned()
    }
}

#[async_trait]
impl ArtifactSubmission for InMemoryArtifactStore {
    async fn create(&self, artifact: NewArtifact) -> Result<Artifact, SubmissionError> {
        let created = Artifact::from_new(ArtifactId::new(), self.tenant_id, artifact, Utc::now());
        tracing::info!(
            tenant_id = %self.tenant_id,
            artifact_id = %created.artifact_id,
            lines = created.artifact_product.len(),
            "artifact saved"
        );
        self.artifacts.lock().await.push(created.clone());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ArtifactForm;
    use artifacts_basket::OrderLine;
    use artifacts_products::Price;

    fn new_artifact(name: &str, lines: Vec<OrderLine>) -> NewArtifact {
        NewArtifact {
            fields: ArtifactForm::new(name),
            artifact_product: lines,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_tenant() {
        let tenant_id = TenantId::new();
        let store = InMemoryArtifactStore::new(tenant_id);

        let line = OrderLine {
            product_id: "A".parse().unwrap(),
            price: Price::new(10),
            quantity: 2,
        };
        let created = store.create(new_artifact("order1", vec![line.clone()])).await.unwrap();

        assert_eq!(created.tenant_id, tenant_id);
        assert_eq!(created.name, "order1");
        assert_eq!(created.artifact_product, vec![line]);
        assert_eq!(store.get(created.artifact_id).await, Some(created));
    }

    #[tokio::test]
    async fn list_returns_artifacts_in_creation_order() {
        let store = InMemoryArtifactStore::new(TenantId::new());
        store.create(new_artifact("first", Vec::new())).await.unwrap();
        store.create(new_artifact("second", Vec::new())).await.unwrap();

        let names: Vec<String> = store.list().await.into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn get_unknown_artifact_is_none() {
        let store = InMemoryArtifactStore::new(TenantId::new());
        assert!(store.get(ArtifactId::new()).await.is_none());
    }

    #[test]
    fn rejection_message_is_surfaced_verbatim() {
        let err = SubmissionError::rejected("Artifact service unavailable");
        assert_eq!(err.message(), "Artifact service unavailable");
        assert_eq!(err.to_string(), "Artifact service unavailable");
    }
}
