//! Core SOS dispatch service implementation.

use std::time::Duration;

use color_eyre::eyre::WrapErr as _;
use sos_core::{
    CallerIdentity, DispatchError, DispatchResult, MulticastMessage, NotificationRequest,
};
use sos_push::MulticastSender;

use crate::{Authorizer, Dispatch, OperatorLog, Severity};

/// Upper bound on a single provider call.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(30);

/// SOS dispatch service.
///
/// Stateless between calls: each dispatch authorizes, validates, makes
/// exactly one multicast call and reduces its outcome.
pub struct SosDispatcher<A, P, L> {
    authorizer: A,
    sender: P,
    log: L,
    provider_timeout: Duration,
}

impl<A, P, L> SosDispatcher<A, P, L> {
    /// Create a new dispatcher.
    pub fn new(authorizer: A, sender: P, log: L) -> Self {
        Self {
            authorizer,
            sender,
            log,
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    /// Set the provider call timeout.
    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }
}

impl<A, P, L> SosDispatcher<A, P, L>
where
    P: MulticastSender,
{
    async fn send(&self, message: &MulticastMessage) -> color_eyre::eyre::Result<DispatchResult> {
        let response =
            match tokio::time::timeout(self.provider_timeout, self.sender.send_multicast(message))
                .await
            {
                Ok(response) => response.wrap_err("multicast send failed")?,
                Err(_) => color_eyre::eyre::bail!(
                    "provider did not respond within {:?}",
                    self.provider_timeout
                ),
            };

        DispatchResult::aggregate(&response, message.tokens.len())
            .wrap_err("malformed provider response")
    }
}

impl<A, P, L> Dispatch for SosDispatcher<A, P, L>
where
    A: Authorizer,
    P: MulticastSender,
    L: OperatorLog,
{
    async fn dispatch(
        &self,
        identity: &CallerIdentity,
        payload: &serde_json::Value,
    ) -> Result<DispatchResult, DispatchError> {
        if !self.authorizer.is_authenticated(identity) {
            return Err(DispatchError::Unauthenticated);
        }

        let request = NotificationRequest::from_payload(payload)?;
        let message = MulticastMessage::from_request(&request);

        match self.send(&message).await {
            Ok(result) => Ok(result),
            Err(e) => {
                let context = format!(
                    "SOS dispatch {} to {} tokens failed",
                    request.sos_id,
                    message.tokens.len()
                );
                self.log.log(Severity::Error, &context, Some(&e));
                Err(DispatchError::Internal)
            }
        }
    }
}
