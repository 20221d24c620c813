//! The create-artifact view.

use std::num::NonZeroU32;
use std::sync::Arc;

use tracing::instrument;

use artifacts_artifacts::{Artifact, ArtifactForm, ArtifactSubmission, NewArtifact};
use artifacts_basket::Basket;
use artifacts_products::{ProductCatalog, ProductId};

use crate::config::CreateViewConfig;
use crate::error::ViewError;
use crate::navigation::Navigator;

/// State and actions behind the create-artifact form.
///
/// All actions run on one logical thread. `submit` borrows the view, so no
/// add/remove can interleave with a pending submission. Dropping the
/// `submit` future before it resolves discards its outcome; follow with
/// [`ArtifactsCreate::cancel`] to leave the view.
pub struct ArtifactsCreate {
    catalog: Arc<dyn ProductCatalog>,
    submission: Arc<dyn ArtifactSubmission>,
    navigator: Arc<dyn Navigator>,
    config: CreateViewConfig,
    form: ArtifactForm,
    basket: Basket,
}

impl ArtifactsCreate {
    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        submission: Arc<dyn ArtifactSubmission>,
        navigator: Arc<dyn Navigator>,
        config: CreateViewConfig,
    ) -> Self {
        Self {
            catalog,
            submission,
            navigator,
            config,
            form: ArtifactForm::default(),
            basket: Basket::default(),
        }
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    pub fn form(&self) -> &ArtifactForm {
        &self.form
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    /// Fetch the catalog and rebuild the basket from it.
    ///
    /// Any previous selection is discarded. On failure the current basket is kept.
    #[instrument(skip(self))]
    pub async fn load_catalog(&mut self) -> Result<usize, ViewError> {
        let products = self.catalog.fetch().await.inspect_err(|err| {
            tracing::warn!(error = %err, "catalog fetch failed");
        })?;
        self.basket = Basket::initialize(products);
        tracing::info!(products = self.basket.len(), "catalog loaded");
        Ok(self.basket.len())
    }

    /// The "+" button for a product.
    pub fn add(&mut self, product_id: &ProductId) -> Result<NonZeroU32, ViewError> {
        Ok(self.basket.increment(product_id)?)
    }

    /// The "-" button for a product.
    pub fn remove(&mut self, product_id: &ProductId) -> Result<Option<NonZeroU32>, ViewError> {
        Ok(self.basket.decrement(product_id)?)
    }

    /// What `submit` would send right now.
    pub fn payload(&self) -> NewArtifact {
        self.basket.to_order_payload(self.form.clone())
    }

    /// Validate the form and hand the payload to the submission sink.
    ///
    /// Success navigates to the list route. Failure returns the error for
    /// display and leaves the form and basket as they were.
    #[instrument(skip(self), fields(name = %self.form.name))]
    pub async fn submit(&self) -> Result<Artifact, ViewError> {
        self.form.validate()?;

        let payload = self.payload();
        tracing::info!(lines = payload.lines().len(), "submitting artifact");

        match self.submission.create(payload).await {
            Ok(artifact) => {
                tracing::info!(artifact_id = %artifact.artifact_id, "artifact created");
                self.navigate_to_list();
                Ok(artifact)
            }
            Err(err) => {
                tracing::warn!(error = %err, "artifact submission failed");
                Err(err.into())
            }
        }
    }

    pub fn cancel(&self) {
        tracing::debug!("create cancelled");
        self.navigate_to_list();
    }

    fn navigate_to_list(&self) {
        tracing::info!(route = %self.config.list_route, "navigating");
        self.navigator.navigate(&self.config.list_route);
    }
}
