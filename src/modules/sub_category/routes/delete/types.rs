pub mod request {
    pub struct Payload {
        pub id: i64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        SubCategoryDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SubCategoryDeleted => (
                    StatusCode::OK,
                    Json(json!({ "message": "Sub-category deleted successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        SubCategoryNotFound,
        FailedToDeleteSubCategory,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SubCategoryNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Sub-category not found" })),
                )
                    .into_response(),
                Self::FailedToDeleteSubCategory => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to delete sub-category" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
