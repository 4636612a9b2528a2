pub mod request {
    use crate::utils::validation::empty_string_as_none;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Filters {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        pub category_id: Option<i64>,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::sub_category::repository::SubCategory;

    pub enum Success {
        SubCategories(Vec<SubCategory>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SubCategories(sub_categories) => {
                    (StatusCode::OK, Json(json!(sub_categories))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToFetchSubCategories,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchSubCategories => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch sub-categories" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
