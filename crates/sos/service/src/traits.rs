//! Service traits.

use sos_core::{CallerIdentity, DispatchError, DispatchResult};

/// SOS dispatch service trait.
#[trait_variant::make(Send)]
pub trait Dispatch: Send + Sync {
    /// Send an SOS notification on behalf of `identity`.
    ///
    /// `payload` is the caller's untyped request body.
    async fn dispatch(
        &self,
        identity: &CallerIdentity,
        payload: &serde_json::Value,
    ) -> Result<DispatchResult, DispatchError>;
}

impl<T: Dispatch> Dispatch for std::sync::Arc<T> {
    async fn dispatch(
        &self,
        identity: &CallerIdentity,
        payload: &serde_json::Value,
    ) -> Result<DispatchResult, DispatchError> {
        (**self).dispatch(identity, payload).await
    }
}

/// Answers whether a call is authenticated.
pub trait Authorizer: Send + Sync {
    fn is_authenticated(&self, identity: &CallerIdentity) -> bool;
}
