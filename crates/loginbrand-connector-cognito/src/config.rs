//! Provider-level configuration
//!
//! The two-field configuration the host supplies once at startup. Credential
//! resolution is delegated to `aws-config`; there is no process-wide mutable
//! credential state, the loaded `SdkConfig` is passed explicitly into
//! [`crate::CognitoBrandingClient`].

use aws_config::{BehaviorVersion, Region, SdkConfig};
use serde::{Deserialize, Serialize};

use loginbrand_connector::error::{ConnectorError, ConnectorResult};

/// Provider-level configuration for the Cognito adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CognitoProviderConfig {
    /// AWS region hosting the user pool.
    pub region: String,

    /// Named credentials profile. When absent, the default credential chain
    /// applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

impl CognitoProviderConfig {
    /// Create a configuration for the given region.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            profile: None,
        }
    }

    /// Select a named credentials profile.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::InvalidConfiguration`] when the region is
    /// empty.
    pub fn validate(&self) -> ConnectorResult<()> {
        if self.region.trim().is_empty() {
            return Err(ConnectorError::invalid_configuration(
                "region must be set",
            ));
        }
        Ok(())
    }

    /// Resolve credentials and region into an [`SdkConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::InvalidConfiguration`] when the
    /// configuration fails validation.
    pub async fn load(&self) -> ConnectorResult<SdkConfig> {
        self.validate()?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()));
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }

        Ok(loader.load().await)
    }
}
