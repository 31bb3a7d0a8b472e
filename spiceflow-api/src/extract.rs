/// Request body decoding
///
/// Handlers that accept a JSON object take the raw body and decode it here.
/// An empty body, or one sent without a JSON content type, reads as an empty
/// object (`T::default()`), so the handler's own field checks answer. A JSON
/// body that does not fit `T` (wrong field type, broken syntax) is a 400 with
/// the decoder's message; it is never treated as empty.

use crate::error::{ApiError, ApiResult};
use axum::{
    body::Bytes,
    http::{header, HeaderMap},
    Json,
};
use serde::de::DeserializeOwned;

/// Decodes a JSON object body, defaulting when there is none
pub fn json_or_default<T>(headers: &HeaderMap, body: &Bytes) -> ApiResult<T>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) || !has_json_content_type(headers) {
        return Ok(T::default());
    }

    let Json(value) = Json::<T>::from_bytes(body).map_err(ApiError::from)?;
    Ok(value)
}

/// `application/json` or any `application/*+json` type
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
