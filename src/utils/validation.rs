use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use regex::Regex;
use serde::{de, de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::json;
use std::{borrow::Cow, fmt, str::FromStr};
use validator::{ValidationError, ValidationErrors};

pub fn into_response(errors: ValidationErrors) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({"errors": errors})))
}

/// `application/x-www-form-urlencoded` body whose decoding failures (missing
/// or malformed fields) are answered with `400 Bad Request`.
pub struct Form<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Form<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Form::<T>::from_request(req, state).await {
            Ok(axum::Form(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::warn!("Failed to decode form body: {}", rejection.body_text());
                Err((
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": rejection.body_text() })),
                )
                    .into_response())
            }
        }
    }
}

/// Treats an absent or blank form field as `None`.
pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

pub fn validate_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    let regex =
        Regex::new(r"^\+?\(?[0-9][0-9 ()-]{4,19}$").expect("Invalid phone number regex");
    match regex.is_match(phone_number) {
        true => Ok(()),
        false => Err(
            ValidationError::new("INVALID_PHONE_NUMBER").with_message(Cow::from(
                "Phone number must be 5 to 20 digits, optionally prefixed with +",
            )),
        ),
    }
}

/// `NaN` and the infinities parse as `f64` but cannot be stored or serialized.
pub fn validate_finite<T: std::borrow::Borrow<f64>>(value: T) -> Result<(), ValidationError> {
    match value.borrow().is_finite() {
        true => Ok(()),
        false => Err(ValidationError::new("NOT_A_FINITE_NUMBER")
            .with_message(Cow::from("Value must be a finite number"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_phone_formats() {
        assert!(validate_phone_number("+996 555 123 456").is_ok());
        assert!(validate_phone_number("0555-123-456").is_ok());
        assert!(validate_phone_number("(0312) 66-00-00").is_ok());
        assert!(validate_phone_number("+(996) 555-123").is_ok());
        assert!(validate_phone_number("((0312)").is_err());
        assert!(validate_phone_number("call me").is_err());
        assert!(validate_phone_number("").is_err());
    }

    #[test]
    fn rejects_non_finite_numbers() {
        assert!(validate_finite(&0.0).is_ok());
        assert!(validate_finite(&6.99).is_ok());
        assert!(validate_finite(&f64::NAN).is_err());
        assert!(validate_finite(&f64::INFINITY).is_err());
        assert!(validate_finite(&f64::NEG_INFINITY).is_err());
    }

    #[derive(Deserialize)]
    struct Filters {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        category_id: Option<i64>,
    }

    #[test]
    fn blank_optional_fields_become_none() {
        let filters: Filters = serde_json::from_str(r#"{"category_id": ""}"#).unwrap();
        assert_eq!(filters.category_id, None);

        let filters: Filters = serde_json::from_str(r#"{"category_id": " 3 "}"#).unwrap();
        assert_eq!(filters.category_id, Some(3));

        let filters: Filters = serde_json::from_str("{}").unwrap();
        assert_eq!(filters.category_id, None);

        assert!(serde_json::from_str::<Filters>(r#"{"category_id": "x"}"#).is_err());
    }
}
