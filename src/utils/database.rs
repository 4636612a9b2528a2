use crate::types::{Context, DatabaseConfig};
use axum::{
    async_trait,
    extract::{Extension, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json, RequestPartsExt,
};
use serde_json::json;
use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Sqlite, SqliteConnection, SqlitePool,
};
use std::{
    fmt,
    ops::{Deref, DerefMut},
    str::FromStr,
    sync::Arc,
};

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: SqlitePool,
}

#[derive(Debug)]
pub enum Error {
    InvalidUrl,
    ConnectionFailed,
    MigrationFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl => write!(f, "invalid database url"),
            Self::ConnectionFailed => write!(f, "failed to connect to the database"),
            Self::MigrationFailed => write!(f, "failed to run database migrations"),
        }
    }
}

pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, Error> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|err| {
            tracing::error!("Invalid database url {}: {}", config.url, err);
            Error::InvalidUrl
        })?
        .create_if_missing(true)
        // deletes never cascade or block; services check references themselves
        .foreign_keys(false);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .map(|pool| DatabaseConnection { pool })
        .map_err(|err| {
            tracing::error!("Error connecting to database {}: {}", config.url, err);
            Error::ConnectionFailed
        })
}

pub async fn migrate(db_conn: &DatabaseConnection) -> Result<(), Error> {
    sqlx::migrate!().run(&db_conn.pool).await.map_err(|err| {
        tracing::error!("{}", err);
        Error::MigrationFailed
    })
}

/// Outcome of an idempotent insert keyed on a natural key.
#[derive(Debug)]
pub enum Insertion<T> {
    Created(T),
    AlreadyExists(T),
}

/// A pooled connection held for the lifetime of one request.
///
/// Acquired when the handler's arguments are extracted and handed back to the
/// pool when dropped, whichever way the handler returns.
pub struct Connection(PoolConnection<Sqlite>);

impl Deref for Connection {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Connection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Connection {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let err = (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to acquire database connection" })),
        );

        let Extension(ctx) = parts
            .extract::<Extension<Arc<Context>>>()
            .await
            .map_err(|_| {
                tracing::error!("Application context missing from request extensions");
                err.clone().into_response()
            })?;

        ctx.db_conn.pool.acquire().await.map(Self).map_err(|e| {
            tracing::error!("Failed to acquire database connection: {}", e);
            err.into_response()
        })
    }
}
