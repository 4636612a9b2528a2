pub mod request {
    use crate::utils::validation::validate_phone_number;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[serde(alias = "branch_name")]
        #[validate(length(
            min = 1,
            max = 100,
            code = "INVALID_BRANCH_NAME",
            message = "Branch name must be between 1 and 100 characters"
        ))]
        pub name: String,
        #[validate(length(
            min = 1,
            max = 255,
            code = "INVALID_ADDRESS",
            message = "Address must be between 1 and 255 characters"
        ))]
        pub address: String,
        #[validate(custom(function = "validate_phone_number"))]
        pub phone: String,
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
        BranchUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::BranchUpdated => (
                    StatusCode::OK,
                    Json(json!({ "message": "Branch updated successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        BranchNotFound,
        BranchNameTaken,
        FailedToUpdateBranch,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::BranchNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Branch not found" })),
                )
                    .into_response(),
                Self::BranchNameTaken => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Branch name already taken" })),
                )
                    .into_response(),
                Self::FailedToUpdateBranch => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update branch" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
