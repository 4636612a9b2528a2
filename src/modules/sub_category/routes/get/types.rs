pub mod request {
    pub struct Payload {
        pub id: i64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::sub_category::repository::SubCategory;

    pub enum Success {
        SubCategory(SubCategory),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SubCategory(sub_category) => {
                    (StatusCode::OK, Json(json!(sub_category))).into_response()
                }
            }
        }
    }

    pub enum Error {
        SubCategoryNotFound,
        FailedToFetchSubCategory,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SubCategoryNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Sub-category not found" })),
                )
                    .into_response(),
                Self::FailedToFetchSubCategory => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch sub-category" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
