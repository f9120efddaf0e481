//! Client adapter interface
//!
//! The narrow seam between the reconciler and the remote identity service:
//! four operations taking already-translated request data. Implementations
//! own request construction and response unmarshaling for their transport
//! and must surface authentication, not-found, and throttling failures as
//! the corresponding [`crate::error::ConnectorError`] variants.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ConnectorResult;
use crate::model::ObservedAsset;
use crate::translate::{AssetCategory, AssetExtension, ColorMode};

/// A fully translated asset ready for transmission.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandingAsset {
    pub category: AssetCategory,
    pub color_mode: ColorMode,
    pub extension: AssetExtension,
    /// Base64-encoded payload. Implementations decode it into the raw bytes
    /// their transport carries.
    pub bytes: String,
}

/// Request data for the remote create operation, keyed by
/// `(user_pool_id, client_id)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBrandingRequest {
    pub user_pool_id: String,
    pub client_id: String,
    /// When true, no settings document is transmitted and the remote service
    /// applies its own defaults.
    pub use_provider_defaults: bool,
    pub settings: Option<Value>,
    pub assets: Vec<BrandingAsset>,
}

/// Request data for the remote update operation, keyed by
/// `(user_pool_id, branding_id)`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBrandingRequest {
    pub branding_id: String,
    pub user_pool_id: String,
    pub use_provider_defaults: bool,
    pub settings: Option<Value>,
    pub assets: Vec<BrandingAsset>,
}

/// Decoded response of a successful create.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedBranding {
    /// Remote-assigned identifier.
    pub id: String,
    /// Returned asset byte payloads. The remote create response does not
    /// echo category or color mode.
    pub assets: Vec<ObservedAsset>,
}

/// Decoded response of a successful describe.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandingDescription {
    pub id: String,
    pub user_pool_id: String,
    pub use_provider_defaults: bool,
    pub settings: Option<Value>,
    pub assets: Vec<ObservedAsset>,
}

/// Client adapter for the remote identity service.
///
/// Each operation issues at most one outbound call; retry policy, if any,
/// belongs to the implementation's transport, not to callers.
#[async_trait]
pub trait BrandingClient: Send + Sync {
    /// Create a branding resource attached to `(user_pool_id, client_id)`.
    async fn create_branding(
        &self,
        request: &CreateBrandingRequest,
    ) -> ConnectorResult<CreatedBranding>;

    /// Describe an existing branding resource.
    async fn describe_branding(
        &self,
        user_pool_id: &str,
        branding_id: &str,
    ) -> ConnectorResult<BrandingDescription>;

    /// Update an existing branding resource in place.
    async fn update_branding(&self, request: &UpdateBrandingRequest) -> ConnectorResult<()>;

    /// Delete an existing branding resource.
    async fn delete_branding(&self, user_pool_id: &str, branding_id: &str)
        -> ConnectorResult<()>;
}
