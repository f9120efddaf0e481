//! # Managed Login Branding Connector Framework
//!
//! Core abstractions for reconciling a declared managed-login-branding
//! configuration against the actual resource held by a remote identity
//! provider.
//!
//! ## Architecture
//!
//! The framework separates the reconciliation logic from the remote
//! transport:
//!
//! - [`model`] - Desired configuration and observed state types
//! - [`translate`] - String enumerations for asset categories, color modes,
//!   and extensions, with strict parsing
//! - [`client`] - The [`client::BrandingClient`] trait the reconciler drives
//!   (create/describe/update/delete), plus its translated request types
//! - [`reconciler`] - [`reconciler::BrandingReconciler`], the state machine
//!   that decides which remote operation to issue and folds results back
//!   into observed state
//! - [`traits`] - The [`traits::ResourceLifecycle`] capability trait so
//!   additional resource kinds can implement the same contract
//! - [`error`] - Error types with configuration/remote classification
//!
//! ## Example
//!
//! ```ignore
//! use loginbrand_connector::prelude::*;
//!
//! let reconciler = BrandingReconciler::new(client);
//!
//! let spec = BrandingSpec {
//!     client_id: "client-1".into(),
//!     user_pool_id: "pool-1".into(),
//!     settings: None,
//!     assets: vec![],
//! };
//!
//! let state = reconciler.create(&spec).await?;
//! assert!(!state.id.is_empty());
//! ```
//!
//! Invalid configuration (malformed settings JSON, unknown category or color
//! mode strings) is rejected before any remote call is issued. Remote
//! failures carry their underlying cause and are never retried by the
//! reconciler itself.

pub mod client;
pub mod error;
pub mod model;
pub mod reconciler;
pub mod traits;
pub mod translate;

/// Prelude module for convenient imports.
///
/// ```
/// use loginbrand_connector::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{
        BrandingAsset, BrandingClient, BrandingDescription, CreateBrandingRequest,
        CreatedBranding, UpdateBrandingRequest,
    };
    pub use crate::error::{ConnectorError, ConnectorResult, Diagnostic, Severity};
    pub use crate::model::{
        AssetSpec, BrandingSpec, BrandingState, ObservedAsset, SettingsPayload,
    };
    pub use crate::reconciler::BrandingReconciler;
    pub use crate::traits::ResourceLifecycle;
    pub use crate::translate::{
        AssetCategory, AssetExtension, ColorMode, DEFAULT_ASSET_EXTENSION,
    };
}

// Re-export async_trait for client implementors
pub use async_trait::async_trait;
