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

    pub struct Payload {
        pub id: i64,
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::utils::validation;

    pub enum Success {
        SubCategoryUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SubCategoryUpdated => (
                    StatusCode::OK,
                    Json(json!({ "message": "Sub-category updated successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        SubCategoryNotFound,
        CategoryNotFound,
        SubCategoryNameTaken,
        SubCategoryHasDishes,
        FailedToUpdateSubCategory,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::SubCategoryNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Sub-category not found" })),
                )
                    .into_response(),
                Self::CategoryNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Category not found" })),
                )
                    .into_response(),
                Self::SubCategoryNameTaken => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "The category already has a sub-category with this name" })),
                )
                    .into_response(),
                Self::SubCategoryHasDishes => (
                    StatusCode::CONFLICT,
                    Json(json!({
                        "error": "Sub-category still has dishes and cannot change category"
                    })),
                )
                    .into_response(),
                Self::FailedToUpdateSubCategory => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update sub-category" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
