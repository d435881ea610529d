//! Custom axum extractors for Jobly
//!
//! Every input rejection (malformed JSON, bad query string, unparseable path
//! segment, failed validation rule) is turned into `Error::Validation` so the
//! client always receives the common `{"error": {...}}` body with a 400.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::Error;

/// Flatten validator output into a single, stable message
fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect();
    messages.sort();
    format!("Validation failed: {}", messages.join(", "))
}

/// JSON extractor that validates the deserialized value automatically.
///
/// Replaces `Json<T>` + manual `.validate()` calls in handlers.
/// Requires `T: DeserializeOwned + Validate`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| Error::Validation(e.body_text()))?;
        value
            .validate()
            .map_err(|e| Error::Validation(validation_message(&e)))?;
        Ok(ValidatedJson(value))
    }
}

/// Query-string extractor with the same validation semantics as `ValidatedJson`
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| Error::Validation(e.body_text()))?;
        value
            .validate()
            .map_err(|e| Error::Validation(validation_message(&e)))?;
        Ok(ValidatedQuery(value))
    }
}

/// Path extractor whose rejection goes through the common error responder
#[derive(Debug)]
pub struct ParsedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ParsedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| Error::Validation(e.body_text()))?;
        Ok(ParsedPath(value))
    }
}

/// Serde helpers for loosely-typed client input
pub mod coerce {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Text(String),
    }

    /// Accept an integer given either as a JSON number or a numeric string.
    ///
    /// Use with `#[serde(default, deserialize_with = "...")]` so an absent
    /// field stays `None`.
    pub fn optional_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<IntOrString>::deserialize(deserializer)?;
        let value = match raw {
            None => return Ok(None),
            Some(IntOrString::Int(n)) => n,
            Some(IntOrString::Text(s)) => s.trim().parse::<i64>().map_err(|_| {
                serde::de::Error::custom(format!("expected an integer, got {s:?}"))
            })?,
        };
        i32::try_from(value)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("integer {value} is out of range")))
    }
}
