//! Directive management API (retry / cancel).
//!
//! Each call is a single `POST /api/{retry,cancel}_directive/{id}` with no
//! body. There is no retry, no idempotency key, and no timeout beyond the
//! HTTP client's defaults.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use sentinel_core::prelude::*;

/// One of the two directive commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveAction {
    Retry,
    Cancel,
}

impl DirectiveAction {
    /// Route segment under `/api/`
    pub fn route(&self) -> &'static str {
        match self {
            DirectiveAction::Retry => "retry_directive",
            DirectiveAction::Cancel => "cancel_directive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DirectiveAction::Retry => "Retry",
            DirectiveAction::Cancel => "Cancel",
        }
    }
}

/// JSON body returned by the action endpoints.
///
/// Successful replies carry `message`; FastAPI errors carry `detail`, which
/// may be a string or a list of validation errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ActionResponse {
    /// The text to report: `message`, else `detail`, else `fallback`.
    pub fn into_text(self, fallback: impl FnOnce() -> String) -> String {
        if let Some(message) = self.message {
            return message;
        }
        match self.detail {
            Some(Value::String(detail)) => detail,
            Some(other) => other.to_string(),
            None => fallback(),
        }
    }
}

/// Issues directive commands against the server.
#[trait_variant::make(DirectiveControl: Send)]
pub trait LocalDirectiveControl {
    /// Perform `action` on directive `id`, returning the server's message.
    async fn perform(&self, action: DirectiveAction, id: &str) -> Result<String>;
}

/// `reqwest`-backed [`DirectiveControl`].
#[derive(Debug, Clone)]
pub struct DirectiveApi {
    client: reqwest::Client,
    base: Url,
}

impl DirectiveApi {
    pub fn new(base: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Build `{base}/api/{route}/{id}` with `id` encoded as one path segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Endpoint`] if the base URL cannot carry a path.
    pub fn action_url(&self, action: DirectiveAction, id: &str) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::endpoint(format!("{} cannot be a base URL", self.base)))?
            .pop_if_empty()
            .extend(["api", action.route(), id]);
        Ok(url)
    }

    pub async fn retry_directive(&self, id: &str) -> Result<String> {
        self.post(DirectiveAction::Retry, id).await
    }

    pub async fn cancel_directive(&self, id: &str) -> Result<String> {
        self.post(DirectiveAction::Cancel, id).await
    }

    async fn post(&self, action: DirectiveAction, id: &str) -> Result<String> {
        let url = self.action_url(action, id)?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url.clone())
            .send()
            .await
            .map_err(|e| Error::http(format!("{e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::http(format!("failed to read response body: {e}")))?;

        let reply: ActionResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("{} {}: non-JSON response ({}): {}", action.label(), url, status, e);
            Error::http(format!("invalid JSON response ({status}): {e}"))
        })?;

        Ok(reply.into_text(|| format!("HTTP {status}")))
    }
}

impl DirectiveControl for DirectiveApi {
    async fn perform(&self, action: DirectiveAction, id: &str) -> Result<String> {
        self.post(action, id).await
    }
}
