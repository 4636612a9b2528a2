use super::types::{request, response};
use crate::{
    modules::dish::{repository, routes::placement},
    utils::database::Insertion,
};
use sqlx::SqliteConnection;
use validator::Validate;

pub async fn service(conn: &mut SqliteConnection, payload: request::Body) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    placement::check(&mut *conn, payload.category_id, payload.sub_category_id)
        .await
        .map_err(|err| match err {
            placement::Error::CategoryNotFound => response::Error::CategoryNotFound,
            placement::Error::SubCategoryNotFound => response::Error::SubCategoryNotFound,
            placement::Error::SubCategoryOutsideCategory => {
                response::Error::SubCategoryOutsideCategory
            }
            placement::Error::UnexpectedError => response::Error::FailedToCreateDish,
        })?;

    let insertion = repository::create(
        conn,
        repository::CreateDishPayload {
            name: payload.name,
            price: payload.price,
            category_id: payload.category_id,
            sub_category_id: payload.sub_category_id,
            image_link: payload.image_link,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateDish)?;

    Ok(match insertion {
        Insertion::Created(dish) => response::Success::DishCreated(dish),
        Insertion::AlreadyExists(dish) => response::Success::DishAlreadyExists(dish),
    })
}
