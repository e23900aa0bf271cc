//! Caller identity.

/// Proof of who is calling, as presented by the hosting environment.
///
/// Evaluated once per dispatch and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CallerIdentity {
    /// No credential was presented.
    #[default]
    Anonymous,
    /// A bearer credential.
    Bearer(String),
}

impl CallerIdentity {
    /// Create a bearer identity.
    pub fn bearer(credential: impl Into<String>) -> Self {
        Self::Bearer(credential.into())
    }

    /// Parse an `Authorization` header value.
    ///
    /// Anything other than a non-empty `Bearer` credential is anonymous.
    pub fn from_authorization(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::Anonymous;
        };

        let Some((scheme, credential)) = value.trim().split_once(' ') else {
            return Self::Anonymous;
        };

        let credential = credential.trim();
        if !scheme.eq_ignore_ascii_case("bearer") || credential.is_empty() {
            return Self::Anonymous;
        }

        Self::Bearer(credential.to_string())
    }

    /// Get the bearer credential, if any.
    pub fn credential(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Bearer(credential) => Some(credential),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_authorization() {
        assert_eq!(
            CallerIdentity::from_authorization(Some("Bearer abc")),
            CallerIdentity::bearer("abc")
        );
        assert_eq!(
            CallerIdentity::from_authorization(Some("bearer  abc ")),
            CallerIdentity::bearer("abc")
        );
        assert_eq!(
            CallerIdentity::from_authorization(None),
            CallerIdentity::Anonymous
        );
        assert_eq!(
            CallerIdentity::from_authorization(Some("Basic abc")),
            CallerIdentity::Anonymous
        );
        assert_eq!(
            CallerIdentity::from_authorization(Some("Bearer")),
            CallerIdentity::Anonymous
        );
        assert_eq!(
            CallerIdentity::from_authorization(Some("Bearer   ")),
            CallerIdentity::Anonymous
        );
    }
}
