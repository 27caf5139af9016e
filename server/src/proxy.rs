//! Same-origin forwarder for the hosted assistant service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser talks to `{prefix}/*` on this server. Each request is replayed
//! against the configured upstream with the prefix stripped: method, query,
//! body and the content negotiation headers go through, and the API key is
//! attached as a bearer token when configured. The upstream status and body
//! come back untouched; only a transport failure becomes a 502.

use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::Instrument;
use uuid::Uuid;

use crate::state::AppState;

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body unreadable: {0}")]
    Body(String),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        tracing::warn!(error = %self, %status, "assistant proxy failed");
        (status, self.to_string()).into_response()
    }
}

/// Rewrite an incoming path-and-query onto the upstream base.
///
/// `/api/assistant/threads/advance?x=1` with prefix `/api/assistant` becomes
/// `{upstream}/threads/advance?x=1`. A path outside the prefix is forwarded
/// as-is.
#[must_use]
pub fn upstream_url(upstream: &str, prefix: &str, path_and_query: &str) -> String {
    let (path, query) = match path_and_query.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path_and_query, None),
    };
    let rest = path
        .strip_prefix(prefix)
        .filter(|rest| rest.is_empty() || rest.starts_with('/'))
        .unwrap_or(path);
    let rest = if rest.is_empty() { "/" } else { rest };

    match query {
        Some(query) if !query.is_empty() => format!("{upstream}{rest}?{query}"),
        _ => format!("{upstream}{rest}"),
    }
}

/// Copy the headers the upstream needs to interpret the body.
fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in [CONTENT_TYPE, ACCEPT] {
        if let Some(value) = incoming.get(&name) {
            out.insert(name, value.clone());
        }
    }
    out
}

/// Axum handler mounted at `{prefix}` and `{prefix}/{*rest}`.
///
/// # Errors
///
/// Returns [`ProxyError`] when the body cannot be read or the upstream is
/// unreachable.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("assistant_proxy", %request_id, method = %req.method(), path = %req.uri().path());
    relay(state, req).instrument(span).await
}

async fn relay(state: AppState, req: Request) -> Result<Response, ProxyError> {
    let cfg = &state.config.assistant;
    let (parts, body) = req.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or("/", |pq| pq.as_str());
    let url = upstream_url(&cfg.upstream, &cfg.prefix, path_and_query);

    let bytes: Bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let mut request = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forwarded_headers(&parts.headers))
        .body(bytes);
    if let Some(key) = &cfg.api_key {
        request = request.bearer_auth(key);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let payload = upstream.bytes().await?;

    tracing::info!(%status, bytes = payload.len(), "assistant proxy relayed");

    let mut response = Response::new(Body::from(payload));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
