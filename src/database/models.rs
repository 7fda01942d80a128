/*!
 * Database entity models.
 *
 * These structures map directly to the `translations` table.
 */

use serde::{Deserialize, Serialize};

use crate::language::TargetLanguage;

/// One successful translation, as appended to the history log
///
/// Records are created once and never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Text the user typed
    pub english_text: String,
    /// Cleaned provider output
    pub translated_text: String,
    /// Data value of the target language
    pub target_language: String,
}

impl TranslationRecord {
    /// Create a record for a translation into `language`
    pub fn new(
        english_text: impl Into<String>,
        translated_text: impl Into<String>,
        language: TargetLanguage,
    ) -> Self {
        Self {
            english_text: english_text.into(),
            translated_text: translated_text.into(),
            target_language: language.value().to_string(),
        }
    }
}

/// A row read back from the `translations` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTranslation {
    /// Auto-incremented identifier
    pub id: i64,
    /// The appended record
    pub record: TranslationRecord,
}

impl StoredTranslation {
    /// Map a `SELECT id, english, translated, language` row
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            record: TranslationRecord {
                english_text: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                translated_text: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                target_language: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            },
        })
    }
}
