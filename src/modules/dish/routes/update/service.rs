use super::types::{request, response};
use crate::modules::dish::{repository, routes::placement};
use sqlx::SqliteConnection;
use validator::Validate;

pub async fn service(conn: &mut SqliteConnection, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::find_by_id(&mut *conn, payload.id)
        .await
        .map_err(|_| response::Error::FailedToUpdateDish)?
        .ok_or(response::Error::DishNotFound)?;

    placement::check(
        &mut *conn,
        payload.body.category_id,
        payload.body.sub_category_id,
    )
    .await
    .map_err(|err| match err {
        placement::Error::CategoryNotFound => response::Error::CategoryNotFound,
        placement::Error::SubCategoryNotFound => response::Error::SubCategoryNotFound,
        placement::Error::SubCategoryOutsideCategory => response::Error::SubCategoryOutsideCategory,
        placement::Error::UnexpectedError => response::Error::FailedToUpdateDish,
    })?;

    repository::update_by_id(
        &mut *conn,
        payload.id,
        repository::UpdateDishPayload {
            name: payload.body.name,
            price: payload.body.price,
            category_id: payload.body.category_id,
            sub_category_id: payload.body.sub_category_id,
            image_link: payload.body.image_link,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::NameTaken => response::Error::DishNameTaken,
        repository::Error::UnexpectedError => response::Error::FailedToUpdateDish,
    })
    .map(|_| response::Success::DishUpdated)
}
