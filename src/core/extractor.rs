use std::collections::HashMap;

use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
    Form,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::core::error::AppError;
use crate::shared::constants::ERR_MALFORMED_JSON;

/// Body extractor accepting JSON or urlencoded forms.
///
/// Form values arrive as strings and are handed to `T` as JSON strings. Only a
/// JSON object is deserialized into `T`; an empty body, any other JSON value or
/// a body with a different content type yields `T::default()` so handlers can
/// report missing fields themselves instead of failing on the body shape.
pub struct JsonOrForm<T>(pub T);

impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(req.headers()) {
            BodyKind::Form => {
                let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(|e| {
                        AppError::BadRequest(format!("Invalid form body: {}", e.body_text()))
                    })?;

                let object: Map<String, Value> = fields
                    .into_iter()
                    .map(|(key, value)| (key, Value::String(value)))
                    .collect();

                from_object(object).map(Self)
            }
            BodyKind::Json => {
                let body = Bytes::from_request(req, state).await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read request body: {}", e.body_text()))
                })?;

                if body.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Self(T::default()));
                }

                match serde_json::from_slice::<Value>(&body) {
                    Ok(Value::Object(object)) => from_object(object).map(Self),
                    Ok(_) => Ok(Self(T::default())),
                    Err(e) => {
                        tracing::debug!("Rejected malformed JSON body: {}", e);
                        Err(AppError::BadRequest(ERR_MALFORMED_JSON.to_string()))
                    }
                }
            }
            BodyKind::Other => Ok(Self(T::default())),
        }
    }
}

fn from_object<T: DeserializeOwned>(object: Map<String, Value>) -> Result<T, AppError> {
    serde_json::from_value(Value::Object(object)).map_err(|e| {
        tracing::debug!("Request body does not fit the expected shape: {}", e);
        AppError::BadRequest(ERR_MALFORMED_JSON.to_string())
    })
}

enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return BodyKind::Other;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if essence == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else if essence == "application/json" || essence.ends_with("+json") {
        BodyKind::Json
    } else {
        BodyKind::Other
    }
}
