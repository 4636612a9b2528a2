pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::promo_code::repository::PromoCode;

    pub enum Success {
        PromoCodes(Vec<PromoCode>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PromoCodes(promo_codes) => {
                    (StatusCode::OK, Json(json!(promo_codes))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToFetchPromoCodes,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchPromoCodes => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch promo codes" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
