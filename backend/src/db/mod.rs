//! Database bootstrap
//!
//! Opens the SQLite connection pool and applies the schema the repositories
//! expect.

pub mod error;

pub use error::DbError;

use crate::config::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Connection pool handle shared by the repositories
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Initialize database connection pool and apply the schema
    ///
    /// # Arguments
    /// * `config` - Database URL and pool size
    ///
    /// # Returns
    /// * `Ok(Database)` if successful
    /// * `Err(DbError)` if the connection or the schema bootstrap failed
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbError> {
        let connection_string = if config.url.starts_with("sqlite:") {
            config.url.clone()
        } else {
            format!("sqlite:{}", config.url)
        };
        let in_memory = is_in_memory(&connection_string);

        if !in_memory {
            ensure_parent_dir(&connection_string)?;
        }

        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(|e| DbError::Configuration(format!("Invalid database path: {}", e)))?
            .create_if_missing(true);

        // An in-memory database lives and dies with its connection, so keep
        // exactly one connection open for the lifetime of the pool.
        let mut pool_options = SqlitePoolOptions::new();
        pool_options = if in_memory {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.max_connections(config.max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection(format!("Failed to connect to database: {}", e)))?;

        info!("Connected to SQLite database at: {}", config.url);

        let db = Self { pool };
        db.run_migrations().await?;

        Ok(db)
    }

    /// Open a private in-memory database with the schema applied
    pub async fn in_memory() -> Result<Self, DbError> {
        Self::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        })
        .await
    }

    /// Run database migrations
    async fn run_migrations(&self) -> Result<(), DbError> {
        info!("Running database migrations...");

        let migration_sql = include_str!("../../migrations/001_create_empleados.sql");

        for statement in split_statements(migration_sql) {
            sqlx::query(&statement)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    DbError::Migration(format!(
                        "{} - Statement: {}",
                        e,
                        statement.chars().take(100).collect::<String>()
                    ))
                })?;
            debug!("Applied statement: {}", statement);
        }

        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Strip `--` comments and split a script into individual statements
fn split_statements(sql: &str) -> Vec<String> {
    let mut cleaned_sql = String::new();
    for line in sql.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("--") {
            continue;
        }
        let without_comments = match trimmed.find("--") {
            Some(comment_pos) => &trimmed[..comment_pos],
            None => trimmed,
        };
        cleaned_sql.push_str(without_comments.trim());
        cleaned_sql.push(' ');
    }

    cleaned_sql
        .split(';')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_in_memory(connection_string: &str) -> bool {
    connection_string.contains(":memory:") || connection_string.contains("mode=memory")
}

fn ensure_parent_dir(connection_string: &str) -> Result<(), DbError> {
    let path = connection_string
        .trim_start_matches("sqlite:")
        .trim_start_matches("//");
    let path = path.split('?').next().unwrap_or(path);

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DbError::Configuration(format!("Failed to create db directory: {}", e))
            })?;
        }
    }
    Ok(())
}
