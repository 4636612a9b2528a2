use super::types::{request, response};
use crate::modules::{category, dish, sub_category::repository};
use sqlx::SqliteConnection;
use validator::Validate;

pub async fn service(conn: &mut SqliteConnection, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let sub_category = repository::find_by_id(&mut *conn, payload.id)
        .await
        .map_err(|_| response::Error::FailedToUpdateSubCategory)?
        .ok_or(response::Error::SubCategoryNotFound)?;

    category::repository::find_by_id(&mut *conn, payload.body.category_id)
        .await
        .map_err(|_| response::Error::FailedToUpdateSubCategory)?
        .ok_or(response::Error::CategoryNotFound)?;

    // dishes pin a sub-category to the category they were placed in
    if sub_category.category_id != payload.body.category_id {
        let dishes = dish::repository::count_by_sub_category_id(&mut *conn, payload.id)
            .await
            .map_err(|_| response::Error::FailedToUpdateSubCategory)?;
        if dishes > 0 {
            return Err(response::Error::SubCategoryHasDishes);
        }
    }

    repository::update_by_id(
        &mut *conn,
        payload.id,
        repository::UpdateSubCategoryPayload {
            name: payload.body.name,
            category_id: payload.body.category_id,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::NameTaken => response::Error::SubCategoryNameTaken,
        repository::Error::UnexpectedError => response::Error::FailedToUpdateSubCategory,
    })
    .map(|_| response::Success::SubCategoryUpdated)
}
