use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::SqliteExecutor;
use std::{fmt, str::FromStr};

/// Where an order is in the kitchen workflow:
/// `Pending -> In Kitchen -> Ready for Pickup -> Completed`.
///
/// Any status may be overwritten by any other.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, sqlx::Type)]
pub enum OrderStatus {
    #[serde(rename = "Pending")]
    #[sqlx(rename = "Pending")]
    Pending,
    #[serde(rename = "In Kitchen")]
    #[sqlx(rename = "In Kitchen")]
    InKitchen,
    #[serde(rename = "Ready for Pickup")]
    #[sqlx(rename = "Ready for Pickup")]
    ReadyForPickup,
    #[serde(rename = "Completed")]
    #[sqlx(rename = "Completed")]
    Completed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::InKitchen => write!(f, "In Kitchen"),
            OrderStatus::ReadyForPickup => write!(f, "Ready for Pickup"),
            OrderStatus::Completed => write!(f, "Completed"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "In Kitchen" => Ok(OrderStatus::InKitchen),
            "Ready for Pickup" => Ok(OrderStatus::ReadyForPickup),
            "Completed" => Ok(OrderStatus::Completed),
            _ => Err(format!("'{}' is not a valid OrderStatus", s)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub description: String,
    pub status: OrderStatus,
    pub user_id: i64,
    pub dish_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// An order with the names of its dish and customer, which are `None` once
/// the referenced rows are gone.
#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct OrderWithDetails {
    pub id: i64,
    pub description: String,
    pub status: OrderStatus,
    pub user_id: i64,
    pub dish_id: i64,
    pub dish_name: Option<String>,
    pub user_name: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateOrderPayload {
    pub description: String,
    pub user_id: i64,
    pub dish_id: i64,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

const SELECT_WITH_DETAILS: &str = "
    SELECT
        orders.id,
        orders.description,
        orders.status,
        orders.user_id,
        orders.dish_id,
        dishes.name AS dish_name,
        users.name AS user_name,
        orders.created_at,
        orders.updated_at
    FROM orders
    LEFT JOIN dishes ON dishes.id = orders.dish_id
    LEFT JOIN users ON users.id = orders.user_id
";

pub async fn create<'e, E: SqliteExecutor<'e>>(
    e: E,
    payload: CreateOrderPayload,
) -> Result<Order, Error> {
    sqlx::query_as::<_, Order>(
        "
        INSERT INTO orders (description, status, user_id, dish_id)
        VALUES (?, ?, ?, ?)
        RETURNING *
        ",
    )
    .bind(payload.description)
    .bind(OrderStatus::Pending)
    .bind(payload.user_id)
    .bind(payload.dish_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while creating an order for user {}: {}",
            payload.user_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: SqliteExecutor<'e>>(e: E, id: i64) -> Result<Option<Order>, Error> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = ?")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching order with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_with_details_by_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: i64,
) -> Result<Option<OrderWithDetails>, Error> {
    let query = format!("{SELECT_WITH_DETAILS} WHERE orders.id = ?");

    sqlx::query_as::<_, OrderWithDetails>(&query)
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching order details with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many_with_details<'e, E: SqliteExecutor<'e>>(
    e: E,
) -> Result<Vec<OrderWithDetails>, Error> {
    let query = format!("{SELECT_WITH_DETAILS} ORDER BY orders.id");

    sqlx::query_as::<_, OrderWithDetails>(&query)
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch many orders: {}", err);
            Error::UnexpectedError
        })
}

/// Sets the status of an order, returning whether a row was changed.
pub async fn update_status_by_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: i64,
    status: OrderStatus,
) -> Result<bool, Error> {
    sqlx::query(
        "
        UPDATE orders SET
            status = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        ",
    )
    .bind(status)
    .bind(id)
    .execute(e)
    .await
    .map(|result| result.rows_affected() > 0)
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to set status of order {} to {}: {}",
            id,
            status,
            err
        );
        Error::UnexpectedError
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_status() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::InKitchen,
            OrderStatus::ReadyForPickup,
            OrderStatus::Completed,
        ] {
            assert_eq!(status.to_string().parse::<OrderStatus>(), Ok(status));
        }
    }

    #[test]
    fn rejects_statuses_outside_the_workflow() {
        assert!("Cancelled".parse::<OrderStatus>().is_err());
        assert!("in kitchen".parse::<OrderStatus>().is_err());
        assert!("InKitchen".parse::<OrderStatus>().is_err());
        assert!("".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn serializes_with_display_names() {
        assert_eq!(
            serde_json::to_value(OrderStatus::ReadyForPickup).unwrap(),
            serde_json::json!("Ready for Pickup")
        );
    }
}
