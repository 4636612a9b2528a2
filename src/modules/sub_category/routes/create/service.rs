use super::types::{request, response};
use crate::{
    modules::{category, sub_category::repository},
    utils::database::Insertion,
};
use sqlx::SqliteConnection;
use validator::Validate;

pub async fn service(conn: &mut SqliteConnection, payload: request::Body) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    category::repository::find_by_id(&mut *conn, payload.category_id)
        .await
        .map_err(|_| response::Error::FailedToCreateSubCategory)?
        .ok_or(response::Error::CategoryNotFound)?;

    repository::create(
        conn,
        repository::CreateSubCategoryPayload {
            name: payload.name,
            category_id: payload.category_id,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateSubCategory)
    .map(|insertion| match insertion {
        Insertion::Created(sub_category) => response::Success::SubCategoryCreated(sub_category),
        Insertion::AlreadyExists(sub_category) => {
            response::Success::SubCategoryAlreadyExists(sub_category)
        }
    })
}
