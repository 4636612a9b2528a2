pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(
            min = 1,
            max = 100,
            code = "INVALID_SUB_CATEGORY_NAME",
            message = "Sub-category name must be between 1 and 100 characters"
        ))]
        pub name: String,
        pub category_id: i64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{modules::sub_category::repository::SubCategory, utils::validation};

    pub enum Success {
        SubCategoryCreated(SubCategory),
        SubCategoryAlreadyExists(SubCategory),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SubCategoryCreated(sub_category) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "message": "Sub-category created!",
                        "sub_category": sub_category
                    })),
                )
                    .into_response(),
                Self::SubCategoryAlreadyExists(sub_category) => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Sub-category already exists",
                        "sub_category": sub_category
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        CategoryNotFound,
        FailedToCreateSubCategory,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::CategoryNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Category not found" })),
                )
                    .into_response(),
                Self::FailedToCreateSubCategory => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create sub-category" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
