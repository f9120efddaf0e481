//! AWS Cognito adapter for the managed login branding connector
//!
//! Implements [`loginbrand_connector::client::BrandingClient`] over the four
//! `*ManagedLoginBranding` operations of the Cognito Identity Provider API,
//! translating the framework's request model into SDK calls and SDK failures
//! into the connector error taxonomy.
//!
//! # Example
//!
//! ```no_run
//! use loginbrand_connector::prelude::*;
//! use loginbrand_connector_cognito::{CognitoBrandingClient, CognitoProviderConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = CognitoProviderConfig::new("ap-southeast-2");
//! let sdk_config = provider.load().await?;
//!
//! let reconciler = BrandingReconciler::new(CognitoBrandingClient::new(&sdk_config));
//!
//! let spec = BrandingSpec {
//!     client_id: "client-1".into(),
//!     user_pool_id: "ap-southeast-2_example".into(),
//!     settings: None,
//!     assets: vec![],
//! };
//! let state = reconciler.create(&spec).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod convert;

pub use client::CognitoBrandingClient;
pub use config::CognitoProviderConfig;
