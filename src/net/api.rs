//! REST helpers for the `/api/prompts` endpoint set.
//!
//! Browser builds (`web` feature): real HTTP calls via `gloo-net`. Native
//! builds: stubs returning `RequestFailed` so pure-logic tests compile and
//! run without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper collapses network failures and non-2xx statuses into a single
//! `RequestFailed` value. Callers surface it as a notification or an inline
//! error block; nothing here panics and no request is retried.

#![allow(clippy::unused_async)]

use super::types::{GenerationRequest, HistoryEntry, StatsSummary};

#[cfg(feature = "web")]
use super::types::{PromptResponse, TemplateRequest};

/// A prompt API round trip that did not produce a usable response:
/// connection failure, non-success status, or an unreadable body.
#[derive(Clone, Debug, thiserror::Error)]
#[error("request failed: {reason}")]
pub struct RequestFailed {
    reason: String,
}

impl RequestFailed {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    #[cfg(feature = "web")]
    fn from_status(status: u16) -> Self {
        Self::new(format!("server returned status {status}"))
    }
}

/// Generate a prompt from the form payload via `POST /api/prompts/generate`.
///
/// # Errors
///
/// Returns `RequestFailed` on any transport failure or non-2xx status.
pub async fn generate(request: &GenerationRequest) -> Result<String, RequestFailed> {
    #[cfg(feature = "web")]
    {
        let resp = gloo_net::http::Request::post("/api/prompts/generate")
            .json(request)
            .map_err(|e| RequestFailed::new(e.to_string()))?
            .send()
            .await
            .map_err(|e| RequestFailed::new(e.to_string()))?;
        if !resp.ok() {
            return Err(RequestFailed::from_status(resp.status()));
        }
        let body: PromptResponse = resp
            .json()
            .await
            .map_err(|e| RequestFailed::new(e.to_string()))?;
        Ok(body.generated_prompt)
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = request;
        Err(RequestFailed::new("not available outside the browser"))
    }
}

/// Load a predefined template prompt via `POST /api/prompts/template`.
///
/// # Errors
///
/// Returns `RequestFailed` on any transport failure or non-2xx status.
pub async fn use_template(template_type: &str) -> Result<String, RequestFailed> {
    #[cfg(feature = "web")]
    {
        let body = TemplateRequest {
            template_type: template_type.to_owned(),
        };
        let resp = gloo_net::http::Request::post("/api/prompts/template")
            .json(&body)
            .map_err(|e| RequestFailed::new(e.to_string()))?
            .send()
            .await
            .map_err(|e| RequestFailed::new(e.to_string()))?;
        if !resp.ok() {
            return Err(RequestFailed::from_status(resp.status()));
        }
        let body: PromptResponse = resp
            .json()
            .await
            .map_err(|e| RequestFailed::new(e.to_string()))?;
        Ok(body.generated_prompt)
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = template_type;
        Err(RequestFailed::new("not available outside the browser"))
    }
}

/// Fetch prior generations via `GET /api/prompts/history`.
///
/// The returned order is whatever the server sent (reverse-chronological);
/// the client does not re-sort.
///
/// # Errors
///
/// Returns `RequestFailed` on any transport failure or non-2xx status.
pub async fn fetch_history() -> Result<Vec<HistoryEntry>, RequestFailed> {
    #[cfg(feature = "web")]
    {
        let resp = gloo_net::http::Request::get("/api/prompts/history")
            .send()
            .await
            .map_err(|e| RequestFailed::new(e.to_string()))?;
        if !resp.ok() {
            return Err(RequestFailed::from_status(resp.status()));
        }
        resp.json()
            .await
            .map_err(|e| RequestFailed::new(e.to_string()))
    }
    #[cfg(not(feature = "web"))]
    {
        Err(RequestFailed::new("not available outside the browser"))
    }
}

/// Fetch the usage summary via `GET /api/prompts/stats`.
///
/// # Errors
///
/// Returns `RequestFailed` on any transport failure or non-2xx status.
pub async fn fetch_stats() -> Result<StatsSummary, RequestFailed> {
    #[cfg(feature = "web")]
    {
        let resp = gloo_net::http::Request::get("/api/prompts/stats")
            .send()
            .await
            .map_err(|e| RequestFailed::new(e.to_string()))?;
        if !resp.ok() {
            return Err(RequestFailed::from_status(resp.status()));
        }
        resp.json()
            .await
            .map_err(|e| RequestFailed::new(e.to_string()))
    }
    #[cfg(not(feature = "web"))]
    {
        Err(RequestFailed::new("not available outside the browser"))
    }
}
