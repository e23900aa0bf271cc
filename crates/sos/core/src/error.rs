//! Caller-facing dispatch errors.

/// Failure returned to the caller of a dispatch.
///
/// Messages are fixed and never include provider detail. The cause of an
/// [`DispatchError::Internal`] is written to the operator log instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// Caller identity missing or invalid.
    #[error("the request is not authenticated")]
    Unauthenticated,

    /// Request shape or content is invalid.
    #[error("{0}")]
    InvalidArgument(String),

    /// Push delivery failed as a whole.
    #[error("failed to send the SOS notification")]
    Internal,
}

impl DispatchError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthenticated => ErrorKind::Unauthenticated,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Internal => ErrorKind::Internal,
        }
    }
}

/// Dispatch error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    Unauthenticated,
    InvalidArgument,
    Internal,
}

impl ErrorKind {
    /// Wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::InvalidArgument => "invalid-argument",
            Self::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
