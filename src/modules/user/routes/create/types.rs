pub mod request {
    use crate::utils::validation::validate_phone_number;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(
            min = 1,
            max = 100,
            code = "INVALID_NAME",
            message = "Name must be between 1 and 100 characters"
        ))]
        pub name: String,
        #[validate(custom(function = "validate_phone_number"))]
        pub phone: String,
        pub role: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{modules::user::repository::User, utils::validation};

    pub enum Success {
        UserCreated(User),
        UserAlreadyExists(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserCreated(user) => (
                    StatusCode::CREATED,
                    Json(json!({ "message": "User created!", "user": user })),
                )
                    .into_response(),
                Self::UserAlreadyExists(user) => (
                    StatusCode::OK,
                    Json(json!({ "message": "User already exists", "user": user })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InvalidRole,
        FailedToCreateUser,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::InvalidRole => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid role specified" })),
                )
                    .into_response(),
                Self::FailedToCreateUser => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create user" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
