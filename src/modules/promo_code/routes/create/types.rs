pub mod request {
    use crate::utils::validation::validate_finite;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(
            min = 1,
            max = 50,
            code = "INVALID_PROMO_CODE",
            message = "Promo code must be between 1 and 50 characters"
        ))]
        pub code: String,
        #[validate(range(
            min = 0.0,
            code = "INVALID_DISCOUNT",
            message = "Discount cannot be negative"
        ))]
        #[validate(custom(function = "validate_finite"))]
        pub discount: f64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{
        modules::promo_code::repository::PromoCode,
        utils::{qr, validation},
    };

    pub enum Success {
        PromoCodeCreated(PromoCode),
        PromoCodeAlreadyExists(PromoCode),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PromoCodeCreated(promo_code) => (
                    StatusCode::CREATED,
                    Json(json!({ "message": "Promo code created!", "promo_code": promo_code })),
                )
                    .into_response(),
                Self::PromoCodeAlreadyExists(promo_code) => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Promo code already exists",
                        "promo_code": promo_code
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToGenerateQrCode(qr::Error),
        FailedToCreatePromoCode,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToGenerateQrCode(err) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("Failed to generate QR code: {}", err) })),
                )
                    .into_response(),
                Self::FailedToCreatePromoCode => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create promo code" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
