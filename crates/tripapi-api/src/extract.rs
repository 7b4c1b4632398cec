use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

/// JSON body that has been deserialized and passed its `Validate` rules.
///
/// Any failure, from a missing content type to a bad email, is reported as
/// a 422 before the handler runs. Deserialization goes through
/// `serde_path_to_error` so each error carries the path of the offending field.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(ApiError::body(
                "Expected request with `Content-Type: application/json`",
                "missing_content_type",
            ));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::body(rejection.body_text(), "body_unreadable"))?;

        let mut deserializer = serde_json::Deserializer::from_slice(&bytes);
        let value: T = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
            tracing::debug!("Rejected request body at `{}`: {}", err.path(), err.inner());
            ApiError::from(err)
        })?;
        deserializer
            .end()
            .map_err(|err| ApiError::body(err.to_string(), "json_invalid"))?;

        value.validate().map_err(|errors| {
            tracing::debug!("Request body failed validation: {}", errors);
            ApiError::from(errors)
        })?;

        Ok(ValidatedJson(value))
    }
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

    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
