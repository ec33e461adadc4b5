use std::{path::Path, str::FromStr, time::Duration};

use sqlx::{
    Error, Executor, Pool, Sqlite,
    sqlite::{
        SqliteConnectOptions, SqliteConnection, SqliteJournalMode, SqlitePoolOptions,
        SqliteSynchronous,
    },
};
use tracing::{info, warn};

pub mod gateway;
pub mod models;
pub mod seed;

pub use gateway::{ExecOutcome, RowLimit, Statement, is_unique_violation};
pub use seed::{SeedReport, seed_if_empty};

// ============================================================================
// Connection Pool Configuration
// ============================================================================

/// SQLite has a single writer, so a handful of connections is plenty.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const DEFAULT_MIN_CONNECTIONS: u32 = 1;

/// Connection acquisition timeout in seconds.
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Acquisition timeout for the degraded pool, which can never connect.
const DEGRADED_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Idle connection timeout in seconds (10 minutes).
const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600;

/// Apply performance pragmas to every new connection.
///
/// - `temp_store = MEMORY` (2): temporary tables in memory
/// - `cache_size = -16000`: 16MB page cache (negative = KB)
/// - `synchronous = NORMAL`: safe with WAL, far fewer fsyncs than FULL
async fn apply_performance_pragmas(conn: &mut SqliteConnection) -> Result<(), Error> {
    conn.execute("PRAGMA temp_store = 2").await?;
    conn.execute("PRAGMA cache_size = -16000").await?;
    conn.execute("PRAGMA synchronous = NORMAL").await?;
    Ok(())
}

fn connect_options(db_path: &Path) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS))
}

/// Create the five site tables if they are missing. Safe on every start.
async fn create_tables(pool: &Pool<Sqlite>) -> Result<(), Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Owned handle to the site store.
///
/// Built once at startup and handed to every request handler. Tests build an
/// isolated one per case with [`DBService::in_memory`].
#[derive(Clone)]
pub struct DBService {
    pub pool: Pool<Sqlite>,
}

impl DBService {
    /// Open (creating if needed) the database file and ensure the tables exist.
    pub async fn connect(db_path: &Path) -> Result<DBService, Error> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        info!(
            path = %db_path.display(),
            max_connections = DEFAULT_MAX_CONNECTIONS,
            "Initializing SQLite connection pool"
        );

        let pool = SqlitePoolOptions::new()
            .max_connections(DEFAULT_MAX_CONNECTIONS)
            .min_connections(DEFAULT_MIN_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Some(Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS)))
            .after_connect(|conn, _meta| {
                Box::pin(async move { apply_performance_pragmas(conn).await })
            })
            .connect_with(connect_options(db_path))
            .await?;

        create_tables(&pool).await?;
        info!("Database tables initialized");

        Ok(DBService { pool })
    }

    /// A private in-memory store with the tables created.
    ///
    /// The pool holds exactly one connection that never expires; the database
    /// lives as long as that connection does.
    pub async fn in_memory() -> Result<DBService, Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        create_tables(&pool).await?;
        Ok(DBService { pool })
    }

    /// A handle whose connections are opened lazily.
    ///
    /// Used when [`DBService::connect`] fails at startup: the server keeps
    /// running and every store call reports its own failure.
    pub fn degraded(db_path: &Path) -> DBService {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(0)
            .acquire_timeout(Duration::from_secs(DEGRADED_ACQUIRE_TIMEOUT_SECS))
            .connect_lazy_with(connect_options(db_path));
        DBService { pool }
    }

    /// Flush the WAL into the main file and close every connection.
    pub async fn close(&self) {
        info!("Running final WAL checkpoint...");
        match gateway::execute(&self.pool, &Statement::new("PRAGMA wal_checkpoint(TRUNCATE)"))
            .await
        {
            Ok(_) => info!("Final WAL checkpoint completed"),
            Err(e) => warn!("Final WAL checkpoint failed (data may still be in WAL): {}", e),
        }

        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection closed");
    }
}
