//! Connector error types
//!
//! Error definitions with configuration/remote classification. Configuration
//! errors are detected before any remote call and are never retried; remote
//! errors carry the underlying cause.

use thiserror::Error;

/// Error that can occur during branding reconciliation.
#[derive(Debug, Error)]
pub enum ConnectorError {
    // Configuration errors (detected before any remote call)
    /// Desired configuration is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Settings document is not valid JSON.
    #[error("invalid settings document: {message}")]
    InvalidSettings { message: String },

    /// A string enumeration value has no remote counterpart.
    #[error("unknown {field} value '{value}'")]
    UnknownVariant { field: &'static str, value: String },

    /// An immutable field differs between desired configuration and observed
    /// state.
    #[error("{field} is immutable once created (observed '{observed}', requested '{requested}')")]
    ImmutableFieldChanged {
        field: &'static str,
        observed: String,
        requested: String,
    },

    /// Observed state carries no remote identifier for an operation that
    /// requires one.
    #[error("no branding id recorded, cannot {operation}")]
    MissingIdentifier { operation: &'static str },

    // Remote errors (surfaced with cause, not retried by the reconciler)
    /// The remote service rejected the credentials.
    #[error("authentication failed: {message}")]
    Auth { message: String },

    /// The remote resource does not exist.
    #[error("resource not found: {message}")]
    NotFound { message: String },

    /// The remote service throttled the request.
    #[error("throttled by remote service: {message}")]
    Throttled { message: String },

    /// Generic remote failure (transport or server-side rejection).
    #[error("remote service error: {message}")]
    Remote {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The remote service answered successfully but the payload is missing
    /// required fields.
    #[error("malformed remote response: {message}")]
    MalformedResponse { message: String },
}

impl ConnectorError {
    /// Check if this error was produced before any remote call was issued.
    ///
    /// Configuration errors require a change to the desired configuration;
    /// retrying the same reconciliation cannot succeed.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ConnectorError::InvalidConfiguration { .. }
                | ConnectorError::InvalidSettings { .. }
                | ConnectorError::UnknownVariant { .. }
                | ConnectorError::ImmutableFieldChanged { .. }
                | ConnectorError::MissingIdentifier { .. }
        )
    }

    /// Check if this error is transient from the remote service's
    /// perspective.
    ///
    /// The reconciler never retries; this classification is for the host.
    pub fn is_transient(&self) -> bool {
        matches!(self, ConnectorError::Throttled { .. })
    }

    /// Get an error code for classification.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConnectorError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConnectorError::InvalidSettings { .. } => "INVALID_SETTINGS",
            ConnectorError::UnknownVariant { .. } => "UNKNOWN_VARIANT",
            ConnectorError::ImmutableFieldChanged { .. } => "IMMUTABLE_FIELD_CHANGED",
            ConnectorError::MissingIdentifier { .. } => "MISSING_IDENTIFIER",
            ConnectorError::Auth { .. } => "AUTH_FAILED",
            ConnectorError::NotFound { .. } => "NOT_FOUND",
            ConnectorError::Throttled { .. } => "THROTTLED",
            ConnectorError::Remote { .. } => "REMOTE_ERROR",
            ConnectorError::MalformedResponse { .. } => "MALFORMED_RESPONSE",
        }
    }

    /// Convert into the structured diagnostic consumed by the configuration
    /// host.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let summary = if self.is_configuration() {
            "Configuration Error"
        } else {
            "Client Error"
        };
        Diagnostic {
            severity: Severity::Error,
            summary: summary.to_string(),
            detail: self.to_string(),
        }
    }

    // Convenience constructors

    /// Create an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        ConnectorError::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create an invalid settings error.
    pub fn invalid_settings(message: impl Into<String>) -> Self {
        ConnectorError::InvalidSettings {
            message: message.into(),
        }
    }

    /// Create an authentication error.
    pub fn auth(message: impl Into<String>) -> Self {
        ConnectorError::Auth {
            message: message.into(),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        ConnectorError::NotFound {
            message: message.into(),
        }
    }

    /// Create a throttled error.
    pub fn throttled(message: impl Into<String>) -> Self {
        ConnectorError::Throttled {
            message: message.into(),
        }
    }

    /// Create a generic remote error.
    pub fn remote(message: impl Into<String>) -> Self {
        ConnectorError::Remote {
            message: message.into(),
            source: None,
        }
    }

    /// Create a generic remote error with the underlying cause attached.
    pub fn remote_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ConnectorError::Remote {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a malformed response error.
    pub fn malformed_response(message: impl Into<String>) -> Self {
        ConnectorError::MalformedResponse {
            message: message.into(),
        }
    }
}

/// Result type for connector operations.
pub type ConnectorResult<T> = Result<T, ConnectorError>;

/// Severity of a diagnostic returned to the configuration host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Structured diagnostic surfaced to the configuration host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}
