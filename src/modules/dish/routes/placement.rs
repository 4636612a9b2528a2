use crate::modules::{category, sub_category};
use sqlx::SqliteConnection;

pub enum Error {
    CategoryNotFound,
    SubCategoryNotFound,
    SubCategoryOutsideCategory,
    UnexpectedError,
}

/// Checks that a dish can be filed under `category_id` and, when given,
/// `sub_category_id`.
pub async fn check(
    conn: &mut SqliteConnection,
    category_id: i64,
    sub_category_id: Option<i64>,
) -> Result<(), Error> {
    category::repository::find_by_id(&mut *conn, category_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::CategoryNotFound)?;

    let Some(sub_category_id) = sub_category_id else {
        return Ok(());
    };

    let sub_category = sub_category::repository::find_by_id(&mut *conn, sub_category_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::SubCategoryNotFound)?;

    if sub_category.category_id != category_id {
        tracing::warn!(
            "Sub-category {} belongs to category {}, not {}",
            sub_category_id,
            sub_category.category_id,
            category_id
        );
        return Err(Error::SubCategoryOutsideCategory);
    }

    Ok(())
}
