//! APNs multicast implementation using the a2 crate.

use a2::NotificationBuilder as _;
use a2::request::payload::Payload;
use color_eyre::eyre::WrapErr as _;
use sos_core::{MulticastMessage, MulticastResponse, SendOutcome};

use crate::MulticastSender;

/// APNs sender using certificate authentication.
///
/// APNs has no batch API, so one multicast becomes one request per token,
/// issued concurrently over the client's shared connection.
pub struct ApnsSender {
    client: a2::Client,
    topic: String,
}

impl ApnsSender {
    /// Create a new APNs sender from PKCS12 certificate bytes and password.
    pub fn new(
        pkcs12_der: &[u8],
        password: &str,
        topic: impl Into<String>,
        endpoint: a2::Endpoint,
    ) -> color_eyre::eyre::Result<Self> {
        let mut cursor = std::io::Cursor::new(pkcs12_der);
        let config = a2::ClientConfig::new(endpoint);

        let client = a2::Client::certificate(&mut cursor, password, config)
            .wrap_err("failed to create APNs client")?;

        Ok(Self::with_client(client, topic))
    }

    /// Create a sender over an already configured client.
    pub fn with_client(client: a2::Client, topic: impl Into<String>) -> Self {
        Self {
            client,
            topic: topic.into(),
        }
    }
}

impl MulticastSender for ApnsSender {
    async fn send_multicast(
        &self,
        message: &MulticastMessage,
    ) -> color_eyre::eyre::Result<MulticastResponse> {
        let sends = message
            .tokens
            .iter()
            .map(|token| self.send_single(message, token));

        // join_all keeps token order
        let results = futures::future::join_all(sends).await;

        collect_outcomes(results)
    }
}

impl ApnsSender {
    async fn send_single(
        &self,
        message: &MulticastMessage,
        token: &str,
    ) -> Result<a2::Response, a2::Error> {
        let payload = build_payload(message, token, &self.topic)?;
        self.client.send(payload).await
    }
}

/// Reduce per-token send results into one outcome per token.
///
/// Fails as a whole only when no request reached APNs at all.
fn collect_outcomes(
    results: Vec<Result<a2::Response, a2::Error>>,
) -> color_eyre::eyre::Result<MulticastResponse> {
    let unreachable = !results.is_empty()
        && results
            .iter()
            .all(|r| matches!(r, Err(e) if is_transport_error(e)));

    if unreachable {
        if let Some(Err(e)) = results.into_iter().next() {
            return Err(e).wrap_err("APNs unreachable");
        }
        color_eyre::eyre::bail!("APNs unreachable");
    }

    Ok(MulticastResponse::PerToken(
        results.into_iter().map(outcome).collect(),
    ))
}

/// Errors that say nothing about the token itself.
fn is_transport_error(e: &a2::Error) -> bool {
    !matches!(
        e,
        a2::Error::ResponseError(..)
            | a2::Error::BuildRequestError(..)
            | a2::Error::SerializeError(..)
    )
}

fn outcome(result: Result<a2::Response, a2::Error>) -> SendOutcome {
    match result {
        Ok(response) => SendOutcome::delivered(response.apns_id),
        Err(a2::Error::ResponseError(response)) => {
            tracing::warn!(status = response.code, "APNs rejected token");
            SendOutcome::failed(format!("APNs status {}", response.code))
        }
        Err(e) => {
            tracing::warn!(error = %e, "APNs send failed for token");
            SendOutcome::failed(e)
        }
    }
}

fn build_payload<'a>(
    message: &'a MulticastMessage,
    token: &'a str,
    topic: &'a str,
) -> Result<Payload<'a>, a2::Error> {
    let mut payload = a2::DefaultNotificationBuilder::new()
        .set_title(&message.notification.title)
        .set_body(&message.notification.body)
        .set_sound("default")
        .build(
            token,
            a2::NotificationOptions {
                apns_topic: Some(topic),
                apns_priority: Some(a2::Priority::High),
                ..Default::default()
            },
        );

    for (key, value) in &message.data {
        payload.add_custom_data(key, value)?;
    }

    Ok(payload)
}
