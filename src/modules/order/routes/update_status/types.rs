pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub status: String,
    }

    pub struct Payload {
        pub id: i64,
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::order::repository::OrderStatus;

    pub enum Success {
        OrderStatusUpdated(OrderStatus),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderStatusUpdated(status) => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Order status updated successfully",
                        "status": status
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidStatus,
        OrderNotFound,
        FailedToUpdateOrderStatus,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidStatus => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "Invalid order status",
                        "allowed": ["Pending", "In Kitchen", "Ready for Pickup", "Completed"]
                    })),
                )
                    .into_response(),
                Self::OrderNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Order not found" })),
                )
                    .into_response(),
                Self::FailedToUpdateOrderStatus => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update order status" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
