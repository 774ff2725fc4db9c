//! Client for the template rebuild endpoint.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: [`send_rebuild`] reports a transport failure, so the state
//! logic stays testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every path ends in a [`RebuildOutcome`]; nothing here panics or retries.
//! Responses that are not the expected `{success, errstr}` shape count as an
//! application failure without a message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "rebuild_test.rs"]
mod rebuild_test;

use std::future::Future;

use serde::Deserialize;

use crate::config::EndpointConfig;

/// Why a rebuild did not succeed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RebuildError {
    /// The request could not complete (network failure, non-2xx status).
    #[error("rebuild request failed: {0}")]
    Transport(String),
    /// The endpoint answered but reported failure.
    #[error("rebuild failed: {}", .0.as_deref().unwrap_or("no message"))]
    Application(Option<String>),
}

impl RebuildError {
    /// Message to show in the tooltip, if the endpoint supplied one.
    pub fn tooltip_message(&self) -> Option<&str> {
        match self {
            Self::Application(Some(msg)) if !msg.trim().is_empty() => Some(msg.as_str()),
            _ => None,
        }
    }
}

pub type RebuildOutcome = Result<(), RebuildError>;

/// A single rebuild request for one template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RebuildRequest {
    pub script_url: String,
    pub mode: String,
    pub blog_id: String,
    pub template_id: String,
}

impl RebuildRequest {
    pub fn new(endpoint: &EndpointConfig, template_id: impl Into<String>) -> Self {
        Self {
            script_url: endpoint.script_url.clone(),
            mode: endpoint.mode.clone(),
            blog_id: endpoint.blog_id.clone(),
            template_id: template_id.into(),
        }
    }

    /// Query parameters in the order the endpoint documents them.
    pub fn query_pairs(&self) -> [(&'static str, &str); 3] {
        [("__mode", self.mode.as_str()), ("blog_id", self.blog_id.as_str()), ("id", self.template_id.as_str())]
    }
}

#[derive(Debug, Default, Deserialize)]
struct RebuildResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    errstr: Option<String>,
}

/// Interpret a response body from the endpoint.
pub fn parse_response(body: &str) -> RebuildOutcome {
    match serde_json::from_str::<RebuildResponse>(body) {
        Ok(RebuildResponse { success: Some(true), .. }) => Ok(()),
        Ok(RebuildResponse { errstr, .. }) => Err(RebuildError::Application(errstr)),
        Err(e) => {
            log::warn!("unexpected rebuild response: {e}");
            Err(RebuildError::Application(None))
        }
    }
}

/// Run a rebuild through `fetch`, which performs the HTTP round trip and
/// yields the response body or a transport error.
pub async fn rebuild_with<F, Fut>(request: RebuildRequest, fetch: F) -> RebuildOutcome
where
    F: FnOnce(RebuildRequest) -> Fut,
    Fut: Future<Output = Result<String, String>>,
{
    let id = request.template_id.clone();
    log::debug!("rebuilding template {id}");
    let outcome = match fetch(request).await {
        Ok(body) => parse_response(&body),
        Err(e) => Err(RebuildError::Transport(e)),
    };
    if let Err(e) = &outcome {
        log::warn!("template {id}: {e}");
    }
    outcome
}

/// Rebuild one template against the real endpoint.
pub async fn send_rebuild(request: RebuildRequest) -> RebuildOutcome {
    rebuild_with(request, fetch_body).await
}

async fn fetch_body(request: RebuildRequest) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&request.script_url)
            .query(request.query_pairs())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("HTTP {}", resp.status()));
        }
        resp.text().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err("not available outside the browser".to_owned())
    }
}
