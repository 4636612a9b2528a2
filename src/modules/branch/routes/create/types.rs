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
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{modules::branch::repository::Branch, utils::validation};

    pub enum Success {
        BranchCreated(Branch),
        BranchAlreadyExists(Branch),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::BranchCreated(branch) => (
                    StatusCode::CREATED,
                    Json(json!({ "message": "Branch created!", "branch": branch })),
                )
                    .into_response(),
                Self::BranchAlreadyExists(branch) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Branch already exists", "branch": branch })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToCreateBranch,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToCreateBranch => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create branch" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
