//! Unwrapping of single-entity response bodies.
//!
//! Most endpoints answer `{"goal": {...}}` / `{"task": {...}}`, but task
//! creation answers with the bare entity.

use serde::de::DeserializeOwned;
use serde_json::Value;

use gtd_core::errors::Result;
use gtd_core::ApiResponse;

/// Decode the entity under `key`, or the whole body when `key` is absent.
pub(crate) fn unwrap_entity<T: DeserializeOwned>(mut body: Value, key: &str) -> Result<T> {
    let inner = body.as_object_mut().and_then(|fields| fields.remove(key));
    match inner {
        Some(entity) => Ok(serde_json::from_value(entity)?),
        None => Ok(serde_json::from_value(body)?),
    }
}

/// [`unwrap_entity`] over a whole response, keeping its status.
pub(crate) fn unwrap_response<T: DeserializeOwned>(
    response: ApiResponse<Value>,
    key: &str,
) -> Result<ApiResponse<T>> {
    let ApiResponse { data, status, .. } = response;
    Ok(ApiResponse::new(unwrap_entity(data, key)?, status))
}
