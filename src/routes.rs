//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health probe and the `/api` forwarder, then stitches them with
//! Leptos SSR rendering under a single Axum router. The admin UI owns no data:
//! every `/api/*` call from the browser is relayed verbatim to the configured
//! upstream service.

use std::path::PathBuf;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Health probe and upstream forwarding.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/{*path}", any(forward))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// API routes + Leptos SSR + static `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Join the upstream base with the incoming `/api` path and raw query.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/api/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Relay the request upstream, preserving method, path, query, body and
/// content-type. The upstream status and body are returned unchanged.
async fn forward(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(base) = state.config.upstream_url.as_deref() else {
        return (StatusCode::SERVICE_UNAVAILABLE, "upstream API not configured").into_response();
    };
    let url = upstream_url(base, &path, query.as_deref());

    let mut request = state.http.request(method.clone(), &url);
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        request = request.header(header::CONTENT_TYPE, content_type.clone());
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, %method, %url, "upstream request failed");
            return (StatusCode::BAD_GATEWAY, "upstream API unreachable").into_response();
        }
    };

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, %method, %url, "upstream body read failed");
            return (StatusCode::BAD_GATEWAY, "upstream API unreachable").into_response();
        }
    };

    if status.is_server_error() {
        tracing::warn!(status = status.as_u16(), %method, %url, "upstream error status");
    } else {
        tracing::debug!(status = status.as_u16(), %method, %url, "forwarded");
    }

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    response
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
