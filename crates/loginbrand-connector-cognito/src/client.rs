//! Cognito branding client
//!
//! [`BrandingClient`] implementation over the Cognito Identity Provider
//! API's managed login branding operations. Each trait method issues exactly
//! one SDK call; retry policy lives in the SDK's transport configuration.

use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::Client;
use tracing::{info, instrument};

use loginbrand_connector::client::{
    BrandingClient, BrandingDescription, CreateBrandingRequest, CreatedBranding,
    UpdateBrandingRequest,
};
use loginbrand_connector::error::{ConnectorError, ConnectorResult};

use crate::convert::{
    asset_to_sdk, classify_remote_error, document_from_json, document_to_json,
    observed_asset_from_sdk,
};

/// Client adapter for AWS Cognito managed login branding.
#[derive(Debug, Clone)]
pub struct CognitoBrandingClient {
    client: Client,
}

impl CognitoBrandingClient {
    /// Create a client from a resolved SDK configuration.
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }

    /// Wrap an already constructed SDK client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BrandingClient for CognitoBrandingClient {
    #[instrument(
        skip(self, request),
        fields(user_pool_id = %request.user_pool_id, client_id = %request.client_id)
    )]
    async fn create_branding(
        &self,
        request: &CreateBrandingRequest,
    ) -> ConnectorResult<CreatedBranding> {
        let mut call = self
            .client
            .create_managed_login_branding()
            .user_pool_id(&request.user_pool_id)
            .client_id(&request.client_id)
            .use_cognito_provided_values(request.use_provider_defaults);
        if let Some(settings) = &request.settings {
            call = call.settings(document_from_json(settings));
        }
        for asset in &request.assets {
            call = call.assets(asset_to_sdk(asset)?);
        }

        let output = call
            .send()
            .await
            .map_err(|err| classify_remote_error("CreateManagedLoginBranding", err))?;

        let branding = output.managed_login_branding().ok_or_else(|| {
            ConnectorError::malformed_response("create response carried no branding resource")
        })?;
        let id = branding
            .managed_login_branding_id()
            .ok_or_else(|| {
                ConnectorError::malformed_response("create response carried no branding id")
            })?
            .to_owned();
        let assets = branding.assets().iter().map(observed_asset_from_sdk).collect();

        info!(branding_id = %id, "created managed login branding");
        Ok(CreatedBranding { id, assets })
    }

    #[instrument(skip(self))]
    async fn describe_branding(
        &self,
        user_pool_id: &str,
        branding_id: &str,
    ) -> ConnectorResult<BrandingDescription> {
        let output = self
            .client
            .describe_managed_login_branding()
            .user_pool_id(user_pool_id)
            .managed_login_branding_id(branding_id)
            .send()
            .await
            .map_err(|err| classify_remote_error("DescribeManagedLoginBranding", err))?;

        let branding = output.managed_login_branding().ok_or_else(|| {
            ConnectorError::malformed_response("describe response carried no branding resource")
        })?;

        Ok(BrandingDescription {
            id: branding
                .managed_login_branding_id()
                .ok_or_else(|| {
                    ConnectorError::malformed_response(
                        "describe response carried no branding id",
                    )
                })?
                .to_owned(),
            user_pool_id: branding
                .user_pool_id()
                .ok_or_else(|| {
                    ConnectorError::malformed_response(
                        "describe response carried no user pool id",
                    )
                })?
                .to_owned(),
            use_provider_defaults: branding.use_cognito_provided_values(),
            settings: branding.settings().map(document_to_json),
            assets: branding.assets().iter().map(observed_asset_from_sdk).collect(),
        })
    }

    #[instrument(
        skip(self, request),
        fields(branding_id = %request.branding_id, user_pool_id = %request.user_pool_id)
    )]
    async fn update_branding(&self, request: &UpdateBrandingRequest) -> ConnectorResult<()> {
        let mut call = self
            .client
            .update_managed_login_branding()
            .user_pool_id(&request.user_pool_id)
            .managed_login_branding_id(&request.branding_id)
            .use_cognito_provided_values(request.use_provider_defaults);
        if let Some(settings) = &request.settings {
            call = call.settings(document_from_json(settings));
        }
        for asset in &request.assets {
            call = call.assets(asset_to_sdk(asset)?);
        }

        call.send()
            .await
            .map_err(|err| classify_remote_error("UpdateManagedLoginBranding", err))?;

        info!("updated managed login branding");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_branding(
        &self,
        user_pool_id: &str,
        branding_id: &str,
    ) -> ConnectorResult<()> {
        self.client
            .delete_managed_login_branding()
            .user_pool_id(user_pool_id)
            .managed_login_branding_id(branding_id)
            .send()
            .await
            .map_err(|err| classify_remote_error("DeleteManagedLoginBranding", err))?;

        info!("deleted managed login branding");
        Ok(())
    }
}
