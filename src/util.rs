use reqwest::Response;
use serde::Deserialize;

use crate::errors::{Error, RequestError, Result};

/// Shape of the backend's JSON error body.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Convert non-2xx responses into a structured error that includes the
/// server's `detail` message.
///
/// If the status is successful (2xx, including `204 No Content`), the
/// original response is returned. Otherwise the body is consumed and parsed
/// as `{"detail": ...}`; when the body is missing or not parseable, the
/// status' canonical reason (or `"Unknown error occurred"`) is used instead.
pub(crate) async fn check_http_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let fallback = || {
        status
            .canonical_reason()
            .unwrap_or("Unknown error occurred")
            .to_string()
    };
    let message = match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.detail)
            .unwrap_or_else(fallback),
        Err(_) => fallback(),
    };

    Err(Error::from(RequestError::Server { status, message }))
}
