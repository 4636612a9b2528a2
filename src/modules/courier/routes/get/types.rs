pub mod request {
    pub struct Payload {
        pub id: i64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::user::repository::User;

    pub enum Success {
        Courier(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Courier(courier) => (StatusCode::OK, Json(json!(courier))).into_response(),
            }
        }
    }

    pub enum Error {
        CourierNotFound,
        FailedToFetchCourier,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CourierNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Courier not found" })),
                )
                    .into_response(),
                Self::FailedToFetchCourier => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch courier" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
