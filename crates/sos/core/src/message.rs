//! Provider-facing multicast message types.

use std::collections::BTreeMap;

use crate::NotificationRequest;

/// Data payload key carrying the SOS event identifier.
pub const SOS_ID_KEY: &str = "sosId";

/// User-visible notification content, shared by every recipient.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// A single multicast send: one payload fanned out to many tokens.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MulticastMessage {
    /// Notification shown to the user.
    pub notification: Notification,
    /// Out-of-band data, not shown to the user.
    pub data: BTreeMap<String, String>,
    /// Target device tokens, in request order.
    pub tokens: Vec<String>,
}

impl MulticastMessage {
    /// Build the multicast send for a validated request.
    pub fn from_request(req: &NotificationRequest) -> Self {
        let mut data = BTreeMap::new();
        data.insert(SOS_ID_KEY.to_string(), req.sos_id.clone());

        Self {
            notification: Notification {
                title: req.title.clone(),
                body: req.body.clone(),
            },
            data,
            tokens: req.tokens.clone(),
        }
    }
}

/// Provider outcome for one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Provider accepted the notification for delivery.
    Delivered {
        /// Provider message ID, if reported.
        message_id: Option<String>,
    },
    /// Provider rejected the notification for this token.
    Failed {
        /// Provider reason, for operators only.
        reason: String,
    },
}

impl SendOutcome {
    /// Create a delivered outcome.
    pub fn delivered(message_id: Option<String>) -> Self {
        Self::Delivered { message_id }
    }

    /// Create a failed outcome.
    pub fn failed(reason: impl std::fmt::Display) -> Self {
        Self::Failed {
            reason: reason.to_string(),
        }
    }

    /// Check if delivery was accepted.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}

/// Provider response to a multicast send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MulticastResponse {
    /// One outcome per token, aligned with the message's token order.
    PerToken(Vec<SendOutcome>),
    /// Only aggregate counts, for providers without per-token detail.
    Aggregate {
        success_count: usize,
        failure_count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_request() {
        let req = NotificationRequest {
            tokens: vec!["t1".to_string(), "t1".to_string()],
            title: "SOS".to_string(),
            body: "Help".to_string(),
            sos_id: "sos-9".to_string(),
        };

        let msg = MulticastMessage::from_request(&req);
        assert_eq!(msg.notification.title, "SOS");
        assert_eq!(msg.notification.body, "Help");
        assert_eq!(msg.tokens, req.tokens);
        assert_eq!(msg.data.len(), 1);
        assert_eq!(msg.data.get(SOS_ID_KEY).map(String::as_str), Some("sos-9"));
    }
}
