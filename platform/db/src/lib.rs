//! Database primitives shared by the service: pool settings, connection
//! setup, the error taxonomy and the employee data access object.

pub mod employees;

use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use thiserror::Error;

pub use employees::{EmployeeDao, EmployeeInput};

/// Shared connection pool alias.
pub type DbPool = DatabaseConnection;

const DEFAULT_DATABASE_URL: &str = "sqlite://employees.db?mode=rwc";

/// Outcome kinds surfaced by the data access layer.
///
/// Callers branch on the variant; `NotFound` is never inferred from the
/// message of a storage error.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("{0}")]
    Validation(String),
    #[error("record not found")]
    NotFound,
    #[error(transparent)]
    Persistence(#[from] DbErr),
}

impl DbError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

pub type DbResult<T> = Result<T, DbError>;

/// Connection settings, normally read once at startup.
#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
}

fn default_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: None,
        }
    }
}

impl DatabaseSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: None,
        }
    }

    /// Reads `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`.
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| default_url());
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|raw| raw.trim().parse().ok());
        Self {
            url,
            max_connections,
        }
    }
}

pub async fn connect(settings: &DatabaseSettings) -> DbResult<DbPool> {
    let mut options = ConnectOptions::new(settings.url.clone());
    options
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    if let Some(max) = settings.max_connections {
        options.max_connections(max);
    }
    let pool = Database::connect(options).await?;
    tracing::debug!(backend = ?pool.get_database_backend(), "database pool ready");
    Ok(pool)
}
