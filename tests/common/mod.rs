/*!
 * Common test utilities for the tractree test suite
 */

use anyhow::Result;
use tempfile::TempDir;

use tractree::database::{HistoryStore, StoredTranslation};
use tractree::providers::mock::MockProvider;
use tractree::{TranslationClient, TranslatorScreen};

/// Route library logs through env_logger for the test run
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Opens a file-backed store in `dir` with its schema initialized
pub async fn create_file_store(dir: &TempDir) -> Result<HistoryStore> {
    let store = HistoryStore::open(dir.path().join("translations.db"))?;
    store.initialize_schema().await?;
    Ok(store)
}

/// Reads every row of the history table, oldest first
pub fn history_rows(store: &HistoryStore) -> Vec<StoredTranslation> {
    store
        .connection()
        .expect("store should be SQLite-backed")
        .execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, english, translated, language FROM translations ORDER BY id",
            )?;
            let rows = stmt
                .query_map([], StoredTranslation::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })
        .expect("history table should be readable")
}

/// A translator screen over `provider` and `store`
pub fn translator(provider: &MockProvider, store: &HistoryStore) -> TranslatorScreen<MockProvider> {
    TranslatorScreen::new(TranslationClient::new(provider.clone()), store.clone())
}
