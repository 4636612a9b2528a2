pub mod request {
    pub struct Payload {
        pub id: i64,
    }
}

pub mod response {
    use axum::{
        extract::Json,
        http::{header, StatusCode},
        response::IntoResponse,
    };
    use serde_json::json;

    pub enum Success {
        QrCode(Vec<u8>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::QrCode(png) => {
                    (StatusCode::OK, [(header::CONTENT_TYPE, "image/png")], png).into_response()
                }
            }
        }
    }

    pub enum Error {
        PromoCodeNotFound,
        FailedToFetchPromoCode,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PromoCodeNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Promo code not found" })),
                )
                    .into_response(),
                Self::FailedToFetchPromoCode => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch promo code" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
