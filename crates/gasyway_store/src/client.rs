//! Token store client
//!
//! All network I/O for token sets goes through [`TokenStoreClient`]. Every
//! call is a single attempt: no caching, no retry. Any response that is not a
//! 2xx carrying the expected `success: true` body is a failure, and a failure
//! never yields a partial token set.

use crate::config::{Credential, StoreConfig};
use crate::error::{Result, StoreError, SAVE_FAILED};
use crate::transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};
use gasyway_theme::TokenSet;
use serde::{Deserialize, Serialize};

/// Endpoint paths, relative to [`StoreConfig::base_url`]
pub mod endpoints {
    pub const ACTIVE: &str = "/design-tokens/active";
    pub const CURRENT: &str = "/admin/design-tokens/current";
    pub const UPDATE: &str = "/admin/design-tokens/update";
    pub const CLEANUP: &str = "/admin/design-tokens/cleanup";
    pub const HEALTH: &str = "/health";
}

/// Body of the token fetch endpoints
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TokensEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub tokens: Option<TokenSet>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TokensEnvelope {
    /// Resolve to a complete token set or a failure
    pub fn into_tokens(self) -> Result<TokenSet> {
        if !self.success {
            return Err(StoreError::Rejected(
                self.error
                    .unwrap_or_else(|| "design token request was not successful".to_string()),
            ));
        }
        self.tokens.ok_or(StoreError::MissingTokens)
    }
}

#[derive(Serialize)]
struct UpdateBody<'a> {
    tokens: &'a TokenSet,
}

#[derive(Deserialize)]
struct UpdateResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Outcome of the server-side duplicate cleanup
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CleanupReport {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    /// `error` wins over `message`; blank strings count as absent
    fn into_message(self) -> Option<String> {
        let present = |text: &String| !text.trim().is_empty();
        self.error.filter(present).or(self.message.filter(present))
    }
}

/// Client for the design token endpoints
#[derive(Debug)]
pub struct TokenStoreClient<T = ReqwestTransport> {
    config: StoreConfig,
    transport: T,
}

impl TokenStoreClient<ReqwestTransport> {
    /// Create a client over HTTP
    pub fn new(config: StoreConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> TokenStoreClient<T> {
    /// Create a client over a custom transport
    pub fn with_transport(config: StoreConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let method = request.method;
        let url = request.url.clone();
        match self.transport.send(request).await {
            Ok(resp) => {
                tracing::debug!(?method, %url, status = resp.status, "token store response");
                Ok(resp)
            }
            Err(e) => {
                tracing::warn!(?method, %url, "token store unreachable: {e}");
                Err(e)
            }
        }
    }

    fn status_error(resp: &HttpResponse, fallback: &str) -> StoreError {
        let message = serde_json::from_slice::<ErrorBody>(&resp.body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| fallback.to_string());
        StoreError::Status {
            status: resp.status,
            message,
        }
    }

    async fn fetch_envelope(&self, path: &str, credential: &Credential) -> Result<TokensEnvelope> {
        let request = HttpRequest::new(Method::Get, self.config.url(path)).bearer(credential.expose());
        let resp = self.send(request).await?;
        if !resp.is_success() {
            return Err(Self::status_error(&resp, "failed to load design tokens"));
        }
        serde_json::from_slice(&resp.body).map_err(|e| StoreError::Protocol(e.to_string()))
    }

    /// Fetch the active token set envelope without interpreting it.
    ///
    /// Non-2xx statuses and unparseable bodies are still errors.
    pub async fn fetch_active_envelope(&self) -> Result<TokensEnvelope> {
        self.fetch_envelope(endpoints::ACTIVE, &self.config.public_key)
            .await
    }

    /// Fetch the token set currently active for public consumers
    pub async fn fetch_active_tokens(&self) -> Result<TokenSet> {
        let tokens = self.fetch_active_envelope().await?.into_tokens()?;
        tracing::debug!(primary = %tokens.primary, "loaded active design tokens");
        Ok(tokens)
    }

    /// Fetch the editing session's working token set
    pub async fn fetch_current_tokens(&self, credential: &Credential) -> Result<TokenSet> {
        let tokens = self
            .fetch_envelope(endpoints::CURRENT, credential)
            .await?
            .into_tokens()?;
        tracing::debug!(primary = %tokens.primary, "loaded current design tokens");
        Ok(tokens)
    }

    /// Replace the remote token set wholesale
    pub async fn save_tokens(&self, tokens: &TokenSet, credential: &Credential) -> Result<()> {
        let body = serde_json::to_vec(&UpdateBody { tokens })
            .map_err(|e| StoreError::Protocol(e.to_string()))?;
        let request = HttpRequest::new(Method::Put, self.config.url(endpoints::UPDATE))
            .bearer(credential.expose())
            .json_body(body);

        let resp = self.send(request).await?;
        if !resp.is_success() {
            let err = Self::status_error(&resp, SAVE_FAILED);
            tracing::warn!("saving design tokens failed: {err}");
            return Err(err);
        }

        let update: UpdateResponse = serde_json::from_slice(&resp.body)
            .map_err(|e| StoreError::Protocol(e.to_string()))?;
        if !update.success {
            let message = update
                .error
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| SAVE_FAILED.to_string());
            tracing::warn!("store rejected design tokens: {message}");
            return Err(StoreError::Rejected(message));
        }

        tracing::info!("design tokens saved");
        Ok(())
    }

    /// Ask the store to drop duplicate token rows
    pub async fn cleanup_duplicates(&self, credential: &Credential) -> Result<CleanupReport> {
        let request = HttpRequest::new(Method::Post, self.config.url(endpoints::CLEANUP))
            .bearer(credential.expose());
        let resp = self.send(request).await?;
        if !resp.is_success() {
            return Err(Self::status_error(&resp, "cleanup failed"));
        }

        let report: CleanupReport = serde_json::from_slice(&resp.body)
            .map_err(|e| StoreError::Protocol(e.to_string()))?;
        if !report.success {
            return Err(StoreError::Rejected(if report.message.is_empty() {
                "cleanup failed".to_string()
            } else {
                report.message
            }));
        }

        tracing::info!(message = %report.message, "design token cleanup finished");
        Ok(report)
    }

    /// Probe the health endpoint. Only the status code matters.
    pub async fn check_health(&self) -> Result<()> {
        let request = HttpRequest::new(Method::Get, self.config.url(endpoints::HEALTH))
            .bearer(self.config.public_key.expose());
        let resp = self.send(request).await?;
        if resp.is_success() {
            Ok(())
        } else {
            Err(StoreError::Status {
                status: resp.status,
                message: "health check failed".to_string(),
            })
        }
    }
}
