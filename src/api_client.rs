pub mod analysis;
pub mod banking;

use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;
use web_sys::FormData;

use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Failure of a backend call. Every adapter surfaces exactly one of these;
/// callers map it to a user-facing message and never retry.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Common POST handler for multipart form bodies.
///
/// The browser sets the multipart boundary itself, so no Content-Type header
/// is attached here.
pub async fn post_multipart<T>(endpoint: &str, form: FormData) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = api_url(endpoint);
    log::debug!("POST (multipart) request to: {}", url);

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| {
            let err = ApiError::Network(e.to_string());
            log::error!("POST {} - {}", endpoint, err);
            err
        })?
        .send()
        .await
        .map_err(|e| {
            let err = ApiError::Network(e.to_string());
            log::error!("POST {} - {}", endpoint, err);
            err
        })?;

    if !response.ok() {
        let err = ApiError::Status(response.status());
        log::error!("POST {} - {}", endpoint, err);
        return Err(err);
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let body: T = response.json().await.map_err(|e| {
        let err = ApiError::Decode(e.to_string());
        log::error!("POST {} - {}", endpoint, err);
        err
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(body)
}

/// Common POST handler for calls with no request body.
pub async fn post_empty<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url).send().await.map_err(|e| {
        let err = ApiError::Network(e.to_string());
        log::error!("POST {} - {}", endpoint, err);
        err
    })?;

    if !response.ok() {
        let err = ApiError::Status(response.status());
        log::error!("POST {} - {}", endpoint, err);
        return Err(err);
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let body: T = response.json().await.map_err(|e| {
        let err = ApiError::Decode(e.to_string());
        log::error!("POST {} - {}", endpoint, err);
        err
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(body)
}
