use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::errors::ApiError;

/// Error envelope both backends use for non-2xx answers.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Decode a backend response. 2xx bodies deserialize into `T`; anything
/// else becomes a `Status` error carrying the envelope's message, falling
/// back to `HTTP {status}` when the body is absent or unparsable.
pub(crate) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json::<T>().await?);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) if !body.error.is_empty() => body.error,
        _ => format!("HTTP {}", status.as_u16()),
    };
    Err(ApiError::Status { status, message })
}

/// Base URLs are stored without a trailing slash so path joining stays
/// uniform.
pub(crate) fn normalize_base_url(url: impl Into<String>) -> String {
    let mut url = url.into();
    while url.ends_with('/') {
        url.pop();
    }
    url
}
