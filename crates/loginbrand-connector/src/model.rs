//! Branding configuration model
//!
//! Desired configuration and observed state for a managed login branding
//! resource, plus the settings-presence decision made once at the boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConnectorError, ConnectorResult};

/// Desired configuration for a managed login branding resource.
///
/// Supplied fresh on every reconciliation call by the configuration host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandingSpec {
    /// Identity provider client the branding attaches to. Immutable once
    /// created.
    pub client_id: String,

    /// User pool that owns the client. Immutable once created.
    pub user_pool_id: String,

    /// Serialized settings document. `None` means the remote service applies
    /// its own defaults; `Some("{}")` means explicit empty settings. The two
    /// are not equivalent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<String>,

    /// Visual assets to upload, in declaration order.
    #[serde(default)]
    pub assets: Vec<AssetSpec>,
}

/// One visual asset in the desired configuration.
///
/// Category and color mode are user-supplied strings validated against the
/// known enumeration tables before any remote call. The transmitted
/// extension is not user-supplied; see
/// [`crate::translate::DEFAULT_ASSET_EXTENSION`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSpec {
    /// Asset category, e.g. `PAGE_BACKGROUND`.
    pub category: String,

    /// Color scheme mode: `LIGHT`, `DARK`, or `DYNAMIC`.
    pub color_mode: String,

    /// Base64-encoded asset payload. Assets are binary image data; base64
    /// keeps them intact in a string-typed field.
    pub bytes: String,
}

/// Observed state of a managed login branding resource.
///
/// Produced by a successful reconciliation and persisted by the host; the
/// connector itself holds no state between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandingState {
    /// Remote-assigned identifier. Set exactly once at creation, never
    /// recomputed.
    pub id: String,

    /// Client id copied from the desired configuration at creation time.
    pub client_id: String,

    /// User pool id copied from the desired configuration at creation time.
    pub user_pool_id: String,

    /// Settings document echoed from the desired configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<String>,

    /// Asset byte payloads, positionally aligned with the declared asset
    /// order on a best-effort basis. Category and color mode are not
    /// returned by the remote create response and cannot be round-tripped.
    #[serde(default)]
    pub assets: Vec<ObservedAsset>,
}

/// One observed asset entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedAsset {
    /// Base64-encoded asset payload as returned by the remote service.
    pub bytes: String,
}

/// The settings-presence decision, made once at the boundary before
/// serialization and never re-inferred afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsPayload {
    /// Settings absent: the remote service applies its own defaults and no
    /// settings document is transmitted.
    ProviderDefaults,
    /// Settings present: the parsed document is transmitted, even when it is
    /// an empty object.
    Explicit(Value),
}

impl SettingsPayload {
    /// Whether the remote-managed-defaults flag is set.
    #[must_use]
    pub fn use_provider_defaults(&self) -> bool {
        matches!(self, SettingsPayload::ProviderDefaults)
    }

    /// The document to transmit, if any.
    #[must_use]
    pub fn document(&self) -> Option<&Value> {
        match self {
            SettingsPayload::ProviderDefaults => None,
            SettingsPayload::Explicit(value) => Some(value),
        }
    }

    /// Consume into the document to transmit, if any.
    #[must_use]
    pub fn into_document(self) -> Option<Value> {
        match self {
            SettingsPayload::ProviderDefaults => None,
            SettingsPayload::Explicit(value) => Some(value),
        }
    }
}

impl BrandingSpec {
    /// Validate the desired configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::InvalidConfiguration`] when a required
    /// identifier is empty.
    pub fn validate(&self) -> ConnectorResult<()> {
        if self.client_id.trim().is_empty() {
            return Err(ConnectorError::invalid_configuration(
                "client_id must be set",
            ));
        }
        if self.user_pool_id.trim().is_empty() {
            return Err(ConnectorError::invalid_configuration(
                "user_pool_id must be set",
            ));
        }
        Ok(())
    }

    /// Decide the settings payload from the declared settings field.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::InvalidSettings`] when the settings string
    /// is present but is not valid JSON.
    pub fn settings_payload(&self) -> ConnectorResult<SettingsPayload> {
        match &self.settings {
            None => Ok(SettingsPayload::ProviderDefaults),
            Some(raw) => serde_json::from_str(raw)
                .map(SettingsPayload::Explicit)
                .map_err(|err| {
                    ConnectorError::invalid_settings(format!(
                        "settings is not valid JSON: {err}"
                    ))
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> BrandingSpec {
        BrandingSpec {
            client_id: "client-1".to_string(),
            user_pool_id: "pool-1".to_string(),
            settings: None,
            assets: vec![],
        }
    }

    #[test]
    fn validate_requires_identifiers() {
        assert!(spec().validate().is_ok());

        let mut missing_client = spec();
        missing_client.client_id = "  ".to_string();
        let err = missing_client.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");

        let mut missing_pool = spec();
        missing_pool.user_pool_id = String::new();
        assert!(missing_pool.validate().is_err());
    }

    #[test]
    fn absent_settings_means_provider_defaults() {
        let payload = spec().settings_payload().unwrap();
        assert!(payload.use_provider_defaults());
        assert!(payload.document().is_none());
    }

    #[test]
    fn empty_document_is_explicit_not_defaults() {
        let mut with_empty = spec();
        with_empty.settings = Some("{}".to_string());

        let payload = with_empty.settings_payload().unwrap();
        assert!(!payload.use_provider_defaults());
        assert_eq!(payload.document(), Some(&serde_json::json!({})));
    }

    #[test]
    fn nested_settings_parse() {
        let mut with_nested = spec();
        with_nested.settings =
            Some(r#"{"components":{"pageBackground":{"enabled":true}}}"#.to_string());

        let payload = with_nested.settings_payload().unwrap();
        assert_eq!(
            payload.document().unwrap()["components"]["pageBackground"]["enabled"],
            serde_json::json!(true)
        );
    }

    #[test]
    fn malformed_settings_is_a_configuration_error() {
        let mut broken = spec();
        broken.settings = Some("{not valid json".to_string());

        let err = broken.settings_payload().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SETTINGS");
        assert!(err.is_configuration());
    }

    #[test]
    fn state_serde_round_trip() {
        let state = BrandingState {
            id: "mlb-1".to_string(),
            client_id: "client-1".to_string(),
            user_pool_id: "pool-1".to_string(),
            settings: Some("{}".to_string()),
            assets: vec![ObservedAsset {
                bytes: "ABCDEFGH".to_string(),
            }],
        };

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["id"], "mlb-1");
        assert_eq!(json["user_pool_id"], "pool-1");
        assert_eq!(json["assets"][0]["bytes"], "ABCDEFGH");

        let back: BrandingState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn absent_settings_is_omitted_from_serialization() {
        let json = serde_json::to_value(spec()).unwrap();
        assert!(json.get("settings").is_none());
    }
}
