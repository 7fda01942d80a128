/*!
 * Database module for the translation history log.
 *
 * This module provides SQLite-based persistence for translations:
 * - `connection`: thread-safe connection handling
 * - `schema`: the `translations` table
 * - `models`: records stored in the table
 * - `repository`: the `HistoryStore` used by the translator screen
 */

pub mod schema;
pub mod connection;
pub mod repository;
pub mod models;

// Re-export main types
pub use connection::DatabaseConnection;
pub use models::{StoredTranslation, TranslationRecord};
pub use repository::HistoryStore;
