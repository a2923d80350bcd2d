use crate::log_info;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::time::{Duration, Instant};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const SLOW_CHECKOUT_MS: u64 = 100;

/// r2d2 pool of PostgreSQL connections, shared by every repository
#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn new(database_url: &str) -> AppResult<Self> {
        if !database_url.starts_with("postgres://") && !database_url.starts_with("postgresql://") {
            return Err(AppError::ConfigError(
                "DATABASE_URL must start with postgres:// or postgresql://".to_string(),
            ));
        }

        // host/db part only, credentials stay out of the log
        log_info!(
            "Connecting to {}",
            database_url.rsplit('@').next().unwrap_or("database")
        );

        let max_size = std::thread::available_parallelism()
            .map(|n| n.get() * 2)
            .unwrap_or(8)
            .min(20) as u32;

        let pool = Pool::builder()
            .max_size(max_size)
            .min_idle(Some((max_size / 4).max(2)))
            .connection_timeout(Duration::from_secs(10))
            .idle_timeout(Some(Duration::from_secs(300)))
            .test_on_check_out(true)
            .build(ConnectionManager::<PgConnection>::new(database_url))
            .map_err(|e| AppError::DatabaseError(format!("Failed to create connection pool: {}", e)))?;

        log_info!("Database pool ready (max {} connections)", max_size);
        Ok(Self { pool })
    }

    pub fn get_connection(&self) -> AppResult<DbConnection> {
        let start = Instant::now();
        let conn = self.pool.get().map_err(|e| {
            LogContext::error_with_context(&e, "Checking out a database connection");
            AppError::from(e)
        })?;

        let waited = start.elapsed().as_millis() as u64;
        if waited > SLOW_CHECKOUT_MS {
            LogContext::slow_operation("connection checkout", waited);
        }
        Ok(conn)
    }

    /// Apply the embedded catalog migrations that have not run yet
    pub fn run_migrations(&self) -> AppResult<usize> {
        let mut conn = self.get_connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::DatabaseError(format!("Failed to run migrations: {}", e)))?;

        log_info!("{} migration(s) applied", applied.len());
        Ok(applied.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_postgres_url() {
        let err = Database::new("mysql://localhost/catalog").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
