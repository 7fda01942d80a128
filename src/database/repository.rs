/*!
 * Translation history store.
 *
 * The store is write-only from the application's point of view: it creates
 * its table and appends records. On runtimes without an embedded database it
 * degrades to a no-op backend instead of failing.
 */

use log::{debug, warn};
use rusqlite::params;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use super::connection::DatabaseConnection;
use super::models::TranslationRecord;
use super::schema;
use crate::app_config::StoreConfig;
use crate::errors::StoreError;

/// Storage backend behind a [`HistoryStore`]
#[derive(Debug, Clone)]
enum Backend {
    /// SQLite database
    Sqlite(DatabaseConnection),
    /// No embedded database available; every operation is a no-op
    Unsupported,
}

/// Counter of detached appends that have not finished yet
#[derive(Debug, Default)]
struct InFlight {
    count: AtomicUsize,
    idle: Notify,
}

impl InFlight {
    fn begin(self: &Arc<Self>) -> InFlightGuard {
        self.count.fetch_add(1, Ordering::SeqCst);
        InFlightGuard(Arc::clone(self))
    }

    async fn wait_idle(&self) {
        loop {
            let notified = self.idle.notified();
            if self.count.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }
}

/// Marks one detached append as finished when dropped, even on panic
struct InFlightGuard(Arc<InFlight>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if self.0.count.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.0.idle.notify_waiters();
        }
    }
}

/// Append-only log of successful translations
///
/// Cloning is cheap; clones share the connection and the in-flight counter.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    backend: Backend,
    in_flight: Arc<InFlight>,
}

impl HistoryStore {
    fn with_backend(backend: Backend) -> Self {
        Self {
            backend,
            in_flight: Arc::new(InFlight::default()),
        }
    }

    /// Open a SQLite-backed store at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = DatabaseConnection::new(path)?;
        Ok(Self::with_backend(Backend::Sqlite(db)))
    }

    /// Create a store over an in-memory database (for testing)
    pub fn in_memory() -> Result<Self, StoreError> {
        let db = DatabaseConnection::new_in_memory()?;
        Ok(Self::with_backend(Backend::Sqlite(db)))
    }

    /// Create a store for a runtime without embedded-database support
    pub fn unsupported() -> Self {
        Self::with_backend(Backend::Unsupported)
    }

    /// Open the configured store, degrading to the no-op backend on failure
    pub fn open_or_degrade(config: &StoreConfig) -> Self {
        if !config.enabled {
            warn!("Embedded database not supported on this runtime; translation history is disabled");
            return Self::unsupported();
        }

        let opened = config
            .resolve_path()
            .map_err(StoreError::from)
            .and_then(Self::open);

        match opened {
            Ok(store) => store,
            Err(e) => {
                warn!("Could not open translation history ({}); history is disabled", e);
                Self::unsupported()
            }
        }
    }

    /// Whether records are actually persisted
    pub fn is_supported(&self) -> bool {
        matches!(self.backend, Backend::Sqlite(_))
    }

    /// Raw connection, for test introspection only
    pub fn connection(&self) -> Option<&DatabaseConnection> {
        match &self.backend {
            Backend::Sqlite(db) => Some(db),
            Backend::Unsupported => None,
        }
    }

    /// Ensure the `translations` table exists
    ///
    /// Idempotent; a no-op on the unsupported backend.
    pub async fn initialize_schema(&self) -> Result<(), StoreError> {
        match &self.backend {
            Backend::Sqlite(db) => {
                db.execute_async(|conn| schema::initialize_schema(conn)).await?;
                Ok(())
            }
            Backend::Unsupported => {
                debug!("Skipping schema initialization on unsupported runtime");
                Ok(())
            }
        }
    }

    /// Insert one row into the history table
    ///
    /// A no-op on the unsupported backend.
    pub async fn append_record(&self, record: &TranslationRecord) -> Result<(), StoreError> {
        let db = match &self.backend {
            Backend::Sqlite(db) => db,
            Backend::Unsupported => {
                debug!("Skipping history append on unsupported runtime");
                return Ok(());
            }
        };

        let record = record.clone();
        let id = db
            .execute_async(move |conn| {
                conn.execute(
                    "INSERT INTO translations (english, translated, language) VALUES (?1, ?2, ?3)",
                    params![record.english_text, record.translated_text, record.target_language],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await?;

        debug!("Appended translation #{} to history", id);
        Ok(())
    }

    /// Append in the background and discard the outcome
    ///
    /// Failures are logged and swallowed. The handle only lets callers
    /// sequence on completion; it never carries an error. Must be called
    /// from within a tokio runtime.
    pub fn append_detached(&self, record: TranslationRecord) -> JoinHandle<()> {
        let guard = self.in_flight.begin();
        let store = self.clone();

        tokio::spawn(async move {
            let _guard = guard;
            if let Err(e) = store.append_record(&record).await {
                warn!("Discarding failed history append: {}", e);
            }
        })
    }

    /// Wait until every detached append issued through this store (or its clones) has finished
    pub async fn flush(&self) {
        self.in_flight.wait_idle().await;
    }
}
