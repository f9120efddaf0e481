//! Branding reconciler
//!
//! The state machine that, given a desired configuration and optional prior
//! observed state, issues the correct remote operation through a
//! [`BrandingClient`] and folds the response back into observed state.
//!
//! All translation and validation happens before the network call; a
//! malformed settings document or an unknown enumeration value aborts the
//! reconciliation with a configuration error and zero remote calls. Each
//! operation performs at most one outbound call and never retries.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::client::{
    BrandingAsset, BrandingClient, BrandingDescription, CreateBrandingRequest,
    UpdateBrandingRequest,
};
use crate::error::{ConnectorError, ConnectorResult};
use crate::model::{BrandingSpec, BrandingState, ObservedAsset};
use crate::traits::ResourceLifecycle;
use crate::translate::DEFAULT_ASSET_EXTENSION;

/// Reconciler for managed login branding resources.
///
/// Generic over the client adapter so hosts can wire in the real remote
/// service or a test double.
#[derive(Debug)]
pub struct BrandingReconciler<C> {
    client: C,
}

impl<C: BrandingClient> BrandingReconciler<C> {
    /// Create a reconciler driving the given client adapter.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Access the underlying client adapter.
    pub fn client(&self) -> &C {
        &self.client
    }
}

/// Translate every declared asset, preserving declaration order.
///
/// The extension is the fixed protocol constant; category and color mode
/// must parse against the known tables or the whole reconciliation is
/// rejected before any remote call.
fn translate_assets(spec: &BrandingSpec) -> ConnectorResult<Vec<BrandingAsset>> {
    spec.assets
        .iter()
        .map(|asset| {
            Ok(BrandingAsset {
                category: asset.category.parse()?,
                color_mode: asset.color_mode.parse()?,
                extension: DEFAULT_ASSET_EXTENSION,
                bytes: asset.bytes.clone(),
            })
        })
        .collect()
}

fn require_id(state: &BrandingState, operation: &'static str) -> ConnectorResult<()> {
    if state.id.is_empty() {
        return Err(ConnectorError::MissingIdentifier { operation });
    }
    Ok(())
}

/// Fold a remote description into prior observed state.
///
/// Only `id` and `user_pool_id` are refreshed from the remote response;
/// `settings` and `assets` keep their last observed values. This matches the
/// legacy read behavior and is the single place to extend when full drift
/// detection is wanted; [`BrandingDescription`] already carries the
/// remaining fields.
#[must_use]
pub fn fold_description(
    state: &BrandingState,
    description: &BrandingDescription,
) -> BrandingState {
    BrandingState {
        id: description.id.clone(),
        client_id: state.client_id.clone(),
        user_pool_id: description.user_pool_id.clone(),
        settings: state.settings.clone(),
        assets: state.assets.clone(),
    }
}

#[async_trait]
impl<C: BrandingClient> ResourceLifecycle for BrandingReconciler<C> {
    type Spec = BrandingSpec;
    type State = BrandingState;

    #[instrument(
        skip(self, spec),
        fields(user_pool_id = %spec.user_pool_id, client_id = %spec.client_id)
    )]
    async fn create(&self, spec: &BrandingSpec) -> ConnectorResult<BrandingState> {
        spec.validate()?;
        let payload = spec.settings_payload()?;
        let assets = translate_assets(spec)?;

        let request = CreateBrandingRequest {
            user_pool_id: spec.user_pool_id.clone(),
            client_id: spec.client_id.clone(),
            use_provider_defaults: payload.use_provider_defaults(),
            settings: payload.into_document(),
            assets,
        };

        let created = self.client.create_branding(&request).await?;
        info!(branding_id = %created.id, "created managed login branding");

        Ok(BrandingState {
            id: created.id,
            client_id: spec.client_id.clone(),
            user_pool_id: spec.user_pool_id.clone(),
            settings: spec.settings.clone(),
            assets: created.assets,
        })
    }

    #[instrument(skip(self, state), fields(branding_id = %state.id))]
    async fn read(&self, state: &BrandingState) -> ConnectorResult<Option<BrandingState>> {
        require_id(state, "read")?;

        match self
            .client
            .describe_branding(&state.user_pool_id, &state.id)
            .await
        {
            Ok(description) => Ok(Some(fold_description(state, &description))),
            Err(ConnectorError::NotFound { .. }) => {
                debug!("branding no longer exists remotely, reporting absent");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    #[instrument(skip(self, spec, state), fields(branding_id = %state.id))]
    async fn update(
        &self,
        spec: &BrandingSpec,
        state: &BrandingState,
    ) -> ConnectorResult<BrandingState> {
        spec.validate()?;
        require_id(state, "update")?;

        if spec.client_id != state.client_id {
            return Err(ConnectorError::ImmutableFieldChanged {
                field: "client_id",
                observed: state.client_id.clone(),
                requested: spec.client_id.clone(),
            });
        }
        if spec.user_pool_id != state.user_pool_id {
            return Err(ConnectorError::ImmutableFieldChanged {
                field: "user_pool_id",
                observed: state.user_pool_id.clone(),
                requested: spec.user_pool_id.clone(),
            });
        }

        let payload = spec.settings_payload()?;
        let assets = translate_assets(spec)?;

        let request = UpdateBrandingRequest {
            branding_id: state.id.clone(),
            user_pool_id: state.user_pool_id.clone(),
            use_provider_defaults: payload.use_provider_defaults(),
            settings: payload.into_document(),
            assets,
        };

        self.client.update_branding(&request).await?;
        info!("updated managed login branding");

        // The update response is not consumed for fidelity refresh; the
        // desired values become the observed values, keyed by the same id.
        Ok(BrandingState {
            id: state.id.clone(),
            client_id: state.client_id.clone(),
            user_pool_id: state.user_pool_id.clone(),
            settings: spec.settings.clone(),
            assets: spec
                .assets
                .iter()
                .map(|asset| ObservedAsset {
                    bytes: asset.bytes.clone(),
                })
                .collect(),
        })
    }

    #[instrument(skip(self, state), fields(branding_id = %state.id))]
    async fn delete(&self, state: &BrandingState) -> ConnectorResult<()> {
        require_id(state, "delete")?;

        match self
            .client
            .delete_branding(&state.user_pool_id, &state.id)
            .await
        {
            Ok(()) => {
                info!("deleted managed login branding");
                Ok(())
            }
            Err(ConnectorError::NotFound { .. }) => {
                debug!("branding already gone, treating delete as success");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}
