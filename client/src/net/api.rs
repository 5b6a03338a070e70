//! REST data-access functions for the admin API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result<_, ApiError>` and never panic. Mutations only check
//! the response status; callers refetch through the query cache instead of
//! trusting mutation response bodies.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use records::{AiModel, AiModelPayload, FollowUp, FollowUpPayload};

#[cfg(any(test, feature = "hydrate"))]
const AI_MODELS_PATH: &str = "/api/ai-models";
#[cfg(any(test, feature = "hydrate"))]
const FOLLOW_UPS_PATH: &str = "/api/follow-ups";

/// Failure of a data-access call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, serialization).
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16 },
    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn ai_model_endpoint(id: &str) -> String {
    format!("{AI_MODELS_PATH}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn ai_model_action_endpoint(id: &str, action: &str) -> String {
    format!("{AI_MODELS_PATH}/{id}/{action}")
}

#[cfg(any(test, feature = "hydrate"))]
fn follow_up_endpoint(id: &str) -> String {
    format!("{FOLLOW_UPS_PATH}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn follow_up_action_endpoint(id: &str, action: &str) -> String {
    format!("{FOLLOW_UPS_PATH}/{id}/{action}")
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::ApiError;

    fn request_error(err: gloo_net::Error) -> ApiError {
        ApiError::Request(err.to_string())
    }

    fn check(resp: &Response) -> Result<(), ApiError> {
        if resp.ok() { Ok(()) } else { Err(ApiError::Status { status: resp.status() }) }
    }

    pub(super) async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
        let resp = Request::get(url).send().await.map_err(request_error)?;
        check(&resp)?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
        let resp = Request::post(url)
            .json(body)
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?;
        check(&resp)
    }

    pub(super) async fn patch_json<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
        let resp = Request::patch(url)
            .json(body)
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?;
        check(&resp)
    }

    pub(super) async fn post_empty(url: &str) -> Result<(), ApiError> {
        let resp = Request::post(url).send().await.map_err(request_error)?;
        check(&resp)
    }

    pub(super) async fn delete(url: &str) -> Result<(), ApiError> {
        let resp = Request::delete(url).send().await.map_err(request_error)?;
        check(&resp)
    }
}

// =============================================================================
// AI MODELS
// =============================================================================

/// Fetch every configured model from `GET /api/ai-models`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is non-2xx, or the
/// body is not a model list.
pub async fn fetch_ai_models() -> Result<Vec<AiModel>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json(AI_MODELS_PATH).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create a model via `POST /api/ai-models`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the status is non-2xx.
pub async fn create_ai_model(payload: &AiModelPayload) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post_json(AI_MODELS_PATH, payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// Update a model via `PATCH /api/ai-models/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the status is non-2xx.
pub async fn update_ai_model(id: &str, payload: &AiModelPayload) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::patch_json(&ai_model_endpoint(id), payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(ApiError::Unavailable)
    }
}

/// Delete a model via `DELETE /api/ai-models/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the status is non-2xx.
pub async fn delete_ai_model(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::delete(&ai_model_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Make a model the default via `POST /api/ai-models/{id}/toggle-default`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the status is non-2xx.
pub async fn toggle_ai_model_default(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post_empty(&ai_model_action_endpoint(id, "toggle-default")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Flip a model between active and inactive via `POST /api/ai-models/{id}/toggle-status`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the status is non-2xx.
pub async fn toggle_ai_model_status(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post_empty(&ai_model_action_endpoint(id, "toggle-status")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// FOLLOW-UPS
// =============================================================================

/// Fetch every follow-up from `GET /api/follow-ups`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is non-2xx, or the
/// body is not a follow-up list.
pub async fn fetch_follow_ups() -> Result<Vec<FollowUp>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json(FOLLOW_UPS_PATH).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create a follow-up via `POST /api/follow-ups`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the status is non-2xx.
pub async fn create_follow_up(payload: &FollowUpPayload) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post_json(FOLLOW_UPS_PATH, payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// Update a follow-up via `PATCH /api/follow-ups/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the status is non-2xx.
pub async fn update_follow_up(id: &str, payload: &FollowUpPayload) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::patch_json(&follow_up_endpoint(id), payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(ApiError::Unavailable)
    }
}

/// Delete a follow-up via `DELETE /api/follow-ups/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the status is non-2xx.
pub async fn delete_follow_up(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::delete(&follow_up_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Enable or disable a follow-up via `POST /api/follow-ups/{id}/toggle-status`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the status is non-2xx.
pub async fn toggle_follow_up_status(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post_empty(&follow_up_action_endpoint(id, "toggle-status")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// INJECTABLE SEAMS
// =============================================================================

/// Model data access as consumed by the model-list controller.
#[async_trait(?Send)]
pub trait ModelApi {
    async fn fetch_models(&self) -> Result<Vec<AiModel>, ApiError>;
    async fn create_model(&self, payload: &AiModelPayload) -> Result<(), ApiError>;
    async fn update_model(&self, id: &str, payload: &AiModelPayload) -> Result<(), ApiError>;
    async fn delete_model(&self, id: &str) -> Result<(), ApiError>;
    async fn toggle_default(&self, id: &str) -> Result<(), ApiError>;
    async fn toggle_status(&self, id: &str) -> Result<(), ApiError>;
}

/// Follow-up data access as consumed by the follow-up controller.
#[async_trait(?Send)]
pub trait FollowUpApi {
    async fn fetch_follow_ups(&self) -> Result<Vec<FollowUp>, ApiError>;
    async fn create_follow_up(&self, payload: &FollowUpPayload) -> Result<(), ApiError>;
    async fn update_follow_up(&self, id: &str, payload: &FollowUpPayload) -> Result<(), ApiError>;
    async fn delete_follow_up(&self, id: &str) -> Result<(), ApiError>;
    async fn toggle_status(&self, id: &str) -> Result<(), ApiError>;
}

/// The real REST API, backed by the free functions above.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

#[async_trait(?Send)]
impl ModelApi for HttpApi {
    async fn fetch_models(&self) -> Result<Vec<AiModel>, ApiError> {
        fetch_ai_models().await
    }

    async fn create_model(&self, payload: &AiModelPayload) -> Result<(), ApiError> {
        create_ai_model(payload).await
    }

    async fn update_model(&self, id: &str, payload: &AiModelPayload) -> Result<(), ApiError> {
        update_ai_model(id, payload).await
    }

    async fn delete_model(&self, id: &str) -> Result<(), ApiError> {
        delete_ai_model(id).await
    }

    async fn toggle_default(&self, id: &str) -> Result<(), ApiError> {
        toggle_ai_model_default(id).await
    }

    async fn toggle_status(&self, id: &str) -> Result<(), ApiError> {
        toggle_ai_model_status(id).await
    }
}

#[async_trait(?Send)]
impl FollowUpApi for HttpApi {
    async fn fetch_follow_ups(&self) -> Result<Vec<FollowUp>, ApiError> {
        fetch_follow_ups().await
    }

    async fn create_follow_up(&self, payload: &FollowUpPayload) -> Result<(), ApiError> {
        create_follow_up(payload).await
    }

    async fn update_follow_up(&self, id: &str, payload: &FollowUpPayload) -> Result<(), ApiError> {
        update_follow_up(id, payload).await
    }

    async fn delete_follow_up(&self, id: &str) -> Result<(), ApiError> {
        delete_follow_up(id).await
    }

    async fn toggle_status(&self, id: &str) -> Result<(), ApiError> {
        toggle_follow_up_status(id).await
    }
}
