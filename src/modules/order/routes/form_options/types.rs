pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::{dish::repository::Dish, user::repository::User};

    pub enum Success {
        OrderFormOptions { users: Vec<User>, dishes: Vec<Dish> },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderFormOptions { users, dishes } => (
                    StatusCode::OK,
                    Json(json!({ "users": users, "dishes": dishes })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchOrderFormOptions,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchOrderFormOptions => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch users and dishes" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
