pub mod request {
    pub struct Payload {
        pub id: i64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        CourierDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CourierDeleted => (
                    StatusCode::OK,
                    Json(json!({ "message": "Courier deleted successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        CourierNotFound,
        FailedToDeleteCourier,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CourierNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Courier not found" })),
                )
                    .into_response(),
                Self::FailedToDeleteCourier => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to delete courier" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
