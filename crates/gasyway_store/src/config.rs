//! Store connection settings

use std::fmt;
use std::time::Duration;

/// Where the token store lives and how to reach its public endpoints
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Base URL of the token functions, without trailing slash
    pub base_url: String,
    /// Public (anonymous) key sent as bearer on public endpoints
    pub public_key: Credential,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>, public_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            public_key: Credential::new(public_key),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Join an endpoint path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Bearer credential. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for the Authorization header
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let config = StoreConfig::new("https://example.test/functions/v1/", "anon");
        assert_eq!(
            config.url("/design-tokens/active"),
            "https://example.test/functions/v1/design-tokens/active"
        );
    }

    #[test]
    fn credential_debug_is_redacted() {
        let credential = Credential::new("secret-token");
        assert_eq!(format!("{credential:?}"), "Credential(***)");
        assert_eq!(credential.expose(), "secret-token");
    }
}
