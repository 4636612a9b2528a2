pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(
            min = 1,
            max = 100,
            code = "INVALID_CATEGORY_NAME",
            message = "Category name must be between 1 and 100 characters"
        ))]
        pub name: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{modules::category::repository::Category, utils::validation};

    pub enum Success {
        CategoryCreated(Category),
        CategoryAlreadyExists(Category),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CategoryCreated(category) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "message": "Category created!",
                        "category": category
                    })),
                )
                    .into_response(),
                Self::CategoryAlreadyExists(category) => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Category already exists",
                        "category": category
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToCreateCategory,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToCreateCategory => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create category" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
