pub mod request {
    pub struct Payload {
        pub id: i64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        PromoCodeDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PromoCodeDeleted => (
                    StatusCode::OK,
                    Json(json!({ "message": "Promo code deleted successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        PromoCodeNotFound,
        FailedToDeletePromoCode,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PromoCodeNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Promo code not found" })),
                )
                    .into_response(),
                Self::FailedToDeletePromoCode => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to delete promo code" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
