//! API key authorization.

use std::collections::HashSet;

use sos_core::CallerIdentity;

use crate::Authorizer;

/// Authorizer accepting bearer credentials from a fixed key set.
#[derive(Debug, Clone, Default)]
pub struct ApiKeyAuthorizer {
    keys: HashSet<String>,
}

impl ApiKeyAuthorizer {
    /// Create an authorizer from API keys. Empty keys are ignored.
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let keys = keys
            .into_iter()
            .map(Into::into)
            .filter(|k: &String| !k.is_empty())
            .collect();

        Self { keys }
    }

    /// Number of accepted keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Authorizer for ApiKeyAuthorizer {
    fn is_authenticated(&self, identity: &CallerIdentity) -> bool {
        identity
            .credential()
            .is_some_and(|credential| self.keys.contains(credential))
    }
}
