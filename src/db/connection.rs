use log::{debug, error, info};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::config::DbConfig;
use crate::errors::{DbError, DbResult};

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

/// Shared handle to the SQLite database.
///
/// Owns a small pool of idle connections. Construct one at startup, pass it by
/// reference to the data-access functions, and `close` it at shutdown.
pub struct Database {
    path: PathBuf,
    max_idle: usize,
    case_sensitive_like: bool,
    idle: Mutex<Vec<Connection>>,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::from_config(&DbConfig {
            database_path: path.into(),
            ..DbConfig::default()
        })
    }

    pub fn from_config(config: &DbConfig) -> Self {
        Self {
            path: config.database_path.clone(),
            max_idle: config.max_idle_connections.max(1),
            case_sensitive_like: config.case_sensitive_city_match,
            idle: Mutex::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of connections currently parked in the pool.
    /// A poisoned lock still reports the parked count.
    pub fn idle_connections(&self) -> usize {
        self.idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Checks out a connection, runs `f(conn)`, and returns the connection to the pool.
    pub fn with_conn<F, T>(&self, f: F) -> DbResult<T>
    where
        F: FnOnce(&mut Connection) -> DbResult<T>,
    {
        let mut conn = self.checkout()?;
        let result = f(&mut conn);

        match &result {
            Ok(_) | Err(DbError::NotFound) => {}
            Err(e) => error!("database call failed: {e}"),
        }

        // The closure's outcome (possibly a committed write) wins over a check-in failure.
        if let Err(e) = self.checkin(conn) {
            error!("returning connection to pool failed: {e}");
        }
        result
    }

    fn checkout(&self) -> DbResult<Connection> {
        let pooled = self.idle.lock().map_err(|_| DbError::Internal)?.pop();
        match pooled {
            Some(conn) => Ok(conn),
            None => self.open(),
        }
    }

    fn checkin(&self, conn: Connection) -> DbResult<()> {
        let mut idle = self.idle.lock().map_err(|_| DbError::Internal)?;
        if idle.len() < self.max_idle {
            idle.push(conn);
        }
        // Surplus connections are dropped (and closed) here.
        Ok(())
    }

    fn open(&self) -> DbResult<Connection> {
        let open_err = |source| DbError::Open {
            path: self.path.display().to_string(),
            source,
        };

        let conn = Connection::open(&self.path).map_err(open_err)?;
        let like = if self.case_sensitive_like { "ON" } else { "OFF" };
        conn.execute_batch(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA case_sensitive_like = {like};"
        ))
        .map_err(open_err)?;

        debug!("opened connection to {}", self.path.display());
        Ok(conn)
    }

    /// Closes every pooled connection. Returns the first close failure, if any.
    pub fn close(self) -> DbResult<()> {
        let idle = self.idle.into_inner().map_err(|_| DbError::Internal)?;
        let mut first_err = None;
        for conn in idle {
            if let Err((_, e)) = conn.close() {
                error!("failed to close connection: {e}");
                if first_err.is_none() {
                    first_err = Some(DbError::Query(e));
                }
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

/// Apply the schema compiled into the crate.
pub fn apply_schema(db: &Database) -> DbResult<()> {
    db.with_conn(|conn| {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    })?;

    info!("Database schema applied to {}", db.path().display());
    Ok(())
}

/// Initialize database from a SQL schema file
pub fn init_db(db: &Database, schema_path: &Path) -> DbResult<()> {
    let schema_sql = fs::read_to_string(schema_path).map_err(|source| DbError::Schema {
        path: schema_path.display().to_string(),
        source,
    })?;

    db.with_conn(|conn| {
        conn.execute_batch(&schema_sql)?;
        Ok(())
    })?;

    info!(
        "Database initialized from {} at {}",
        schema_path.display(),
        db.path().display()
    );
    Ok(())
}
