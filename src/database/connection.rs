use crate::config::Config;
use crate::error::{Error, Result};
use serde::Serialize;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info, warn};

const MAX_CONNECTIONS: u32 = 50;
const PING_INTERVAL: Duration = Duration::from_secs(10);

/// Reachability of the backing store. Mutated only by the connection
/// manager's supervisor task; handlers read snapshots before store I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Disconnecting,
}

impl ConnectionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionState::Disconnected => "Disconnected",
            ConnectionState::Connecting => "Connecting",
            ConnectionState::Connected => "Connected",
            ConnectionState::Disconnecting => "Disconnecting",
        }
    }
}

/// Owns the store connection lifecycle: connect, detect failure, retry
/// after a fixed delay, expose the current readiness state. Writes are
/// never queued while disconnected; callers check state first.
#[derive(Clone)]
pub struct ConnectionManager {
    state_tx: Arc<watch::Sender<ConnectionState>>,
    pool: Arc<RwLock<Option<PgPool>>>,
    retry_delay: Duration,
    connect_timeout: Duration,
}

impl ConnectionManager {
    pub fn new(retry_delay: Duration, connect_timeout: Duration) -> Self {
        let (state_tx, _) = watch::channel(ConnectionState::Disconnected);
        Self {
            state_tx: Arc::new(state_tx),
            pool: Arc::new(RwLock::new(None)),
            retry_delay,
            connect_timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Duration::from_secs(config.db_retry_delay_secs),
            Duration::from_secs(config.db_connect_timeout_secs),
        )
    }

    /// Synchronous, non-blocking snapshot of the current readiness state.
    pub fn current_state(&self) -> ConnectionState {
        *self.state_tx.subscribe().borrow()
    }

    /// Observe state transitions; used by the reconnect tests.
    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.state_tx.subscribe()
    }

    pub fn pool(&self) -> Option<PgPool> {
        self.pool
            .read()
            .expect("connection pool lock poisoned")
            .clone()
    }

    fn set_state(&self, state: ConnectionState) {
        self.state_tx.send_replace(state);
    }

    fn store_pool(&self, pool: Option<PgPool>) -> Option<PgPool> {
        let mut guard = self.pool.write().expect("connection pool lock poisoned");
        std::mem::replace(&mut *guard, pool)
    }

    /// Establish a fresh connection. Idempotent: an existing pool is closed
    /// first. Missing connection string is a configuration error and is the
    /// only failure the supervisor does not retry.
    pub async fn connect(&self, database_url: Option<&str>) -> Result<()> {
        let url = database_url
            .ok_or_else(|| Error::Config("DATABASE_URL is not set".to_string()))?;

        if self.pool().is_some() {
            self.disconnect().await;
        }

        self.set_state(ConnectionState::Connecting);
        info!("connecting to database");

        let connected = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(self.connect_timeout)
            .connect(url)
            .await;

        let pool = match connected {
            Ok(pool) => pool,
            Err(err) => {
                self.set_state(ConnectionState::Disconnected);
                let classified = Error::from_connect_error(err);
                if let Error::Connection { kind, ref message } = classified {
                    error!(kind = kind.as_str(), error = %message, "database connection failed");
                }
                return Err(classified);
            }
        };

        if let Err(err) = sqlx::migrate!("./migrations").run(&pool).await {
            pool.close().await;
            self.set_state(ConnectionState::Disconnected);
            error!(error = %err, "database migration failed");
            return Err(Error::Internal(format!("Migration failed: {}", err)));
        }

        self.store_pool(Some(pool));
        self.set_state(ConnectionState::Connected);
        info!("database connected");
        Ok(())
    }

    /// Close and drop the current pool, if any.
    pub async fn disconnect(&self) {
        self.set_state(ConnectionState::Disconnecting);
        if let Some(pool) = self.store_pool(None) {
            pool.close().await;
        }
        self.set_state(ConnectionState::Disconnected);
    }

    /// Supervised lifecycle: connect, probe liveness while connected,
    /// schedule a reconnect after the configured delay when the connection
    /// fails or drops. Returns only on a configuration error.
    pub async fn run(&self, database_url: Option<String>) -> Result<()> {
        if database_url.is_none() {
            return Err(Error::Config("DATABASE_URL is not set".to_string()));
        }

        loop {
            match self.current_state() {
                ConnectionState::Connected => {
                    let alive = match self.pool() {
                        Some(pool) => sqlx::query("SELECT 1").execute(&pool).await.is_ok(),
                        None => false,
                    };
                    if alive {
                        tokio::time::sleep(PING_INTERVAL).await;
                    } else {
                        warn!(
                            retry_in_secs = self.retry_delay.as_secs(),
                            "database connection lost, scheduling reconnect"
                        );
                        self.disconnect().await;
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
                _ => match self.connect(database_url.as_deref()).await {
                    Ok(()) => {}
                    Err(err @ Error::Config(_)) => return Err(err),
                    Err(_) => {
                        // connect() already logged the categorized cause
                        warn!(
                            retry_in_secs = self.retry_delay.as_secs(),
                            "retrying database connection"
                        );
                        tokio::time::sleep(self.retry_delay).await;
                    }
                },
            }
        }
    }
}
