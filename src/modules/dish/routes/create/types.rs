pub mod request {
    use crate::utils::validation::{empty_string_as_none, validate_finite};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(
            min = 1,
            max = 100,
            code = "INVALID_DISH_NAME",
            message = "Dish name must be between 1 and 100 characters"
        ))]
        pub name: String,
        #[validate(range(
            min = 0.0,
            code = "INVALID_DISH_PRICE",
            message = "Dish price cannot be negative"
        ))]
        #[validate(custom(function = "validate_finite"))]
        pub price: f64,
        pub category_id: i64,
        #[serde(default, deserialize_with = "empty_string_as_none")]
        pub sub_category_id: Option<i64>,
        #[serde(default, deserialize_with = "empty_string_as_none")]
        #[validate(url(code = "INVALID_IMAGE_LINK", message = "Image link must be a URL"))]
        pub image_link: Option<String>,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{modules::dish::repository::Dish, utils::validation};

    pub enum Success {
        DishCreated(Dish),
        DishAlreadyExists(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishCreated(dish) => (
                    StatusCode::CREATED,
                    Json(json!({ "message": "Dish created!", "dish": dish })),
                )
                    .into_response(),
                Self::DishAlreadyExists(dish) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Dish already exists", "dish": dish })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        CategoryNotFound,
        SubCategoryNotFound,
        SubCategoryOutsideCategory,
        FailedToCreateDish,
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
                Self::SubCategoryNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Sub-category not found" })),
                )
                    .into_response(),
                Self::SubCategoryOutsideCategory => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Sub-category does not belong to category" })),
                )
                    .into_response(),
                Self::FailedToCreateDish => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create dish" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
