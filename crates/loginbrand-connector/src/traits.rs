//! Resource lifecycle trait
//!
//! Capability contract for declaratively managed remote resources. The
//! branding reconciler is currently the only implementor; further resource
//! kinds implement the same contract rather than the reconciler branching on
//! type tags.

use async_trait::async_trait;

use crate::error::ConnectorResult;

/// The four reconciliation operations over one remote resource kind.
///
/// Every operation is all-or-nothing with respect to observable state: on
/// failure the caller's persisted state must be left untouched.
#[async_trait]
pub trait ResourceLifecycle: Send + Sync {
    /// Desired configuration supplied by the host.
    type Spec: Send + Sync;
    /// Observed state persisted by the host.
    type State: Send + Sync;

    /// Create the remote resource from the desired configuration.
    ///
    /// Precondition: no observed state exists yet.
    async fn create(&self, spec: &Self::Spec) -> ConnectorResult<Self::State>;

    /// Refresh observed state from the remote service.
    ///
    /// Returns `Ok(None)` when the remote resource no longer exists, so the
    /// host can treat it as logically absent and recreate it.
    async fn read(&self, state: &Self::State) -> ConnectorResult<Option<Self::State>>;

    /// Move the remote resource toward the desired configuration, keeping
    /// its identity.
    async fn update(&self, spec: &Self::Spec, state: &Self::State)
        -> ConnectorResult<Self::State>;

    /// Remove the remote resource. Idempotent from the caller's perspective:
    /// a resource that is already gone is a success.
    async fn delete(&self, state: &Self::State) -> ConnectorResult<()>;
}
