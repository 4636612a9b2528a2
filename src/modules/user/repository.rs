use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqliteExecutor};
use std::{fmt, str::FromStr};

use crate::utils::database::Insertion;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Kitchen,
    Administration,
    Courier,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Kitchen => write!(f, "kitchen"),
            Role::Administration => write!(f, "administration"),
            Role::Courier => write!(f, "courier"),
            Role::User => write!(f, "user"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kitchen" => Ok(Role::Kitchen),
            "administration" => Ok(Role::Administration),
            "courier" => Ok(Role::Courier),
            "user" => Ok(Role::User),
            _ => Err(format!("'{}' is not a valid Role", s)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub role: Role,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateUserPayload {
    pub name: String,
    pub phone: String,
    pub role: Role,
}

pub struct UpdateUserPayload {
    pub name: String,
    pub phone: String,
}

#[derive(Default)]
pub struct Filters {
    pub role: Option<Role>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    PhoneTaken,
}

pub async fn create(
    conn: &mut SqliteConnection,
    payload: CreateUserPayload,
) -> Result<Insertion<User>, Error> {
    let inserted = sqlx::query_as::<_, User>(
        "
        INSERT INTO users (name, phone, role)
        VALUES (?, ?, ?)
        ON CONFLICT (phone, role) DO NOTHING
        RETURNING *
        ",
    )
    .bind(&payload.name)
    .bind(&payload.phone)
    .bind(payload.role)
    .fetch_optional(&mut *conn)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while creating {} {}: {}",
            payload.role,
            payload.name,
            err
        );
        Error::UnexpectedError
    })?;

    if let Some(user) = inserted {
        return Ok(Insertion::Created(user));
    }

    sqlx::query_as::<_, User>("SELECT * FROM users WHERE phone = ? AND role = ?")
        .bind(&payload.phone)
        .bind(payload.role)
        .fetch_one(&mut *conn)
        .await
        .map(Insertion::AlreadyExists)
        .map_err(|err| {
            tracing::error!(
                "{} with phone {} conflicted but could not be fetched: {}",
                payload.role,
                payload.phone,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_by_id<'e, E: SqliteExecutor<'e>>(e: E, id: i64) -> Result<Option<User>, Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id_and_role<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: i64,
    role: Role,
) -> Result<Option<User>, Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ? AND role = ?")
        .bind(id)
        .bind(role)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching {} with id {}: {}",
                role,
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: SqliteExecutor<'e>>(
    e: E,
    filters: Filters,
) -> Result<Vec<User>, Error> {
    sqlx::query_as::<_, User>(
        "
        SELECT * FROM users
        WHERE role = COALESCE(?, role)
        ORDER BY id
        ",
    )
    .bind(filters.role)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many users: {}", err);
        Error::UnexpectedError
    })
}

pub async fn update_by_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: i64,
    payload: UpdateUserPayload,
) -> Result<(), Error> {
    sqlx::query(
        "
        UPDATE users SET
            name = ?,
            phone = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        ",
    )
    .bind(payload.name)
    .bind(payload.phone)
    .bind(id)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| match err {
        sqlx::Error::Database(err) if err.is_unique_violation() => Error::PhoneTaken,
        err => {
            tracing::error!(
                "Error occurred while trying to update a user by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        }
    })
}

pub async fn delete_by_id<'e, E: SqliteExecutor<'e>>(e: E, id: i64) -> Result<(), Error> {
    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete a user by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_role() {
        for role in [Role::Kitchen, Role::Administration, Role::Courier, Role::User] {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn rejects_unknown_roles() {
        assert!("admin".parse::<Role>().is_err());
        assert!("Courier".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn serializes_in_lowercase() {
        assert_eq!(
            serde_json::to_value(Role::Administration).unwrap(),
            serde_json::json!("administration")
        );
    }
}
