pub mod request {
    pub struct Payload {
        pub id: i64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderSentToKitchen { updated: bool },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderSentToKitchen { updated } => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Order sent to kitchen",
                        "updated": updated
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToSendOrderToKitchen,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToSendOrderToKitchen => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to send order to kitchen" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
