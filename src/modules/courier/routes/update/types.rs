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
        CourierUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CourierUpdated => (
                    StatusCode::OK,
                    Json(json!({ "message": "Courier updated successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        CourierNotFound,
        CourierPhoneTaken,
        FailedToUpdateCourier,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::CourierNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Courier not found" })),
                )
                    .into_response(),
                Self::CourierPhoneTaken => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Another courier already uses this phone number" })),
                )
                    .into_response(),
                Self::FailedToUpdateCourier => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update courier" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
