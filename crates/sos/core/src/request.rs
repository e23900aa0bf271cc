//! SOS notification request and payload validation.

use serde_json::Value;

use crate::DispatchError;

const TOKENS_INVALID: &str = "tokens must be a non-empty array of device token strings";
const TITLE_INVALID: &str = "title must be a non-empty string";
const BODY_INVALID: &str = "body must be a non-empty string";
const SOS_ID_INVALID: &str = "sosId must be a non-empty string";

/// Validated SOS notification request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    /// Device tokens, in send order. Duplicates are separate targets.
    pub tokens: Vec<String>,
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub body: String,
    /// Originating SOS event identifier.
    pub sos_id: String,
}

impl NotificationRequest {
    /// Validate an untyped caller payload.
    ///
    /// Fields are checked in the order `tokens`, `title`, `body`, `sosId`
    /// and the first violation is returned.
    pub fn from_payload(payload: &Value) -> Result<Self, DispatchError> {
        let tokens = parse_tokens(payload.get("tokens"))?;
        let title = require_string(payload.get("title"), TITLE_INVALID)?;
        let body = require_string(payload.get("body"), BODY_INVALID)?;
        let sos_id = require_string(payload.get("sosId"), SOS_ID_INVALID)?;

        Ok(Self {
            tokens,
            title,
            body,
            sos_id,
        })
    }
}

fn parse_tokens(value: Option<&Value>) -> Result<Vec<String>, DispatchError> {
    let items = match value {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return Err(DispatchError::invalid_argument(TOKENS_INVALID)),
    };

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| DispatchError::invalid_argument(TOKENS_INVALID))
        })
        .collect()
}

fn require_string(value: Option<&Value>, message: &str) -> Result<String, DispatchError> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(DispatchError::invalid_argument(message)),
    }
}
