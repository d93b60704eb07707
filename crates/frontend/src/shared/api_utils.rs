//! HTTP helpers for talking to the job endpoint
//!
//! Wraps `window.fetch` and maps every failure into [`ApiError`].

use contracts::domain::a001_service_job::JobListError;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Request, RequestInit, RequestMode, Response};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// fetch rejected or a JS call failed along the way
    #[error("request failed: {0}")]
    Transport(String),
    #[error("HTTP {status}")]
    Status { status: u16 },
    #[error(transparent)]
    Payload(#[from] JobListError),
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    fn from_js(e: JsValue) -> Self {
        ApiError::Transport(format!("{e:?}"))
    }
}

/// Send a request and return the response body as text
///
/// A non-2xx status is an error; the body is not inspected for that.
pub async fn fetch_text(method: &str, url: &str, json_body: Option<&str>) -> Result<String, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = json_body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(ApiError::from_js)?;
    if json_body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(ApiError::from_js)?;
    } else {
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(ApiError::from_js)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::from_js)?;
    let resp: Response = resp_value.dyn_into().map_err(ApiError::from_js)?;
    if !resp.ok() {
        return Err(ApiError::Status { status: resp.status() });
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(ApiError::from_js)?)
        .await
        .map_err(ApiError::from_js)?;
    text.as_string()
        .ok_or_else(|| ApiError::Transport("bad text".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status { status: 502 }.to_string(), "HTTP 502");
        assert_eq!(
            ApiError::from(JobListError::NotAnArray("object")).to_string(),
            "expected a JSON array of jobs, got object"
        );
    }
}
