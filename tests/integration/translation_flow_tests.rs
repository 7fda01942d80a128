/*!
 * Integration tests for the translate, display and persist flow
 */

use anyhow::Result;
use tractree::database::HistoryStore;
use tractree::providers::mock::MockProvider;
use tractree::screens::TRANSLATION_FAILED_MESSAGE;
use tractree::{Submission, TargetLanguage};
use crate::common;

/// Hello to Kannada, with the provider wrapping its answer in quotes
#[tokio::test]
async fn test_translate_helloToKannada_shouldDisplayAndPersistUnquotedText() -> Result<()> {
    common::init_test_logging();
    let dir = common::create_temp_dir()?;
    let store = common::create_file_store(&dir).await?;
    let provider = MockProvider::replying("\"ನಮಸ್ಕಾರ\"");
    let screen = common::translator(&provider, &store);

    screen.set_input_text("Hello");
    screen.select_language_named("Kannada")?;

    match screen.submit().await {
        Submission::Translated { text, persisted } => {
            assert_eq!(text, "ನಮಸ್ಕಾರ");
            persisted.await?;
        }
        other => panic!("expected a translation, got {:?}", other),
    }

    assert_eq!(screen.display_text().as_deref(), Some("ನಮಸ್ಕಾರ"));

    let rows = common::history_rows(&store);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].record.english_text, "Hello");
    assert_eq!(rows[0].record.translated_text, "ನಮಸ್ಕಾರ");
    assert_eq!(rows[0].record.target_language, "Kannada");
    Ok(())
}

/// A provider failure shows the fallback text and writes nothing
#[tokio::test]
async fn test_translate_withNetworkError_shouldShowFallbackAndAppendNothing() -> Result<()> {
    common::init_test_logging();
    let store = HistoryStore::in_memory()?;
    store.initialize_schema().await?;
    let screen = common::translator(&MockProvider::failing(), &store);

    screen.set_input_text("Hello");
    let submission = screen.submit().await;
    store.flush().await;

    assert!(matches!(submission, Submission::Failed));
    assert_eq!(screen.display_text().as_deref(), Some(TRANSLATION_FAILED_MESSAGE));
    assert!(common::history_rows(&store).is_empty());
    Ok(())
}

/// A provider that answers with no text is treated like a failure
#[tokio::test]
async fn test_translate_withEmptyProviderReply_shouldShowFallbackAndAppendNothing() -> Result<()> {
    common::init_test_logging();
    let store = HistoryStore::in_memory()?;
    store.initialize_schema().await?;
    let provider = MockProvider::empty();
    let screen = common::translator(&provider, &store);

    screen.set_input_text("Hello");
    let submission = screen.submit().await;
    store.flush().await;

    assert!(matches!(submission, Submission::Failed));
    assert_eq!(provider.request_count(), 1);
    assert_eq!(screen.display_text().as_deref(), Some(TRANSLATION_FAILED_MESSAGE));
    assert!(common::history_rows(&store).is_empty());
    assert!(screen.can_submit());
    Ok(())
}

/// A reply with only an opening quote is displayed and stored without it
#[tokio::test]
async fn test_translate_withUnclosedQuote_shouldPersistUnquotedText() -> Result<()> {
    common::init_test_logging();
    let store = HistoryStore::in_memory()?;
    store.initialize_schema().await?;
    let screen = common::translator(&MockProvider::replying("\"ನಮಸ್ಕಾರ"), &store);

    screen.set_input_text("Hello");
    let submission = screen.submit().await;
    store.flush().await;

    assert!(matches!(submission, Submission::Translated { .. }));
    assert_eq!(screen.display_text().as_deref(), Some("ನಮಸ್ಕಾರ"));
    let rows = common::history_rows(&store);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].record.translated_text, "ನಮಸ್ಕಾರ");
    Ok(())
}

/// A failure does not poison the next interaction
#[tokio::test]
async fn test_translate_afterFailure_nextSuccessShouldReplaceFallback() -> Result<()> {
    let store = HistoryStore::in_memory()?;
    store.initialize_schema().await?;

    let failing = common::translator(&MockProvider::failing(), &store);
    failing.set_input_text("Hello");
    failing.submit().await;

    let working = common::translator(&MockProvider::replying("Namaste"), &store);
    working.set_input_text("Hello");
    working.select_language(TargetLanguage::Hindi);
    working.submit().await;
    store.flush().await;

    assert_eq!(working.display_text().as_deref(), Some("Namaste"));
    assert_eq!(common::history_rows(&store).len(), 1);
    Ok(())
}

/// Consecutive translations each get their own row with increasing ids
#[tokio::test]
async fn test_translate_twiceInARow_shouldAppendTwoRowsWithIncreasingIds() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let store = common::create_file_store(&dir).await?;
    let screen = common::translator(&MockProvider::replying("'translated'"), &store);

    screen.set_input_text("First");
    screen.select_language(TargetLanguage::Tamil);
    screen.submit().await;

    screen.set_input_text("Second");
    screen.select_language(TargetLanguage::Punjabi);
    screen.submit().await;

    store.flush().await;

    let rows = common::history_rows(&store);
    assert_eq!(rows.len(), 2);
    assert!(rows[1].id > rows[0].id);
    assert_eq!(rows[0].record.english_text, "First");
    assert_eq!(rows[0].record.target_language, "Tamil");
    assert_eq!(rows[1].record.english_text, "Second");
    assert_eq!(rows[1].record.target_language, "Punjabi");
    assert!(rows.iter().all(|r| r.record.translated_text == "translated"));
    Ok(())
}

/// The picked language is what the provider sees and what gets stored
#[tokio::test]
async fn test_translate_everyLanguage_shouldReachDirectiveAndHistory() -> Result<()> {
    let store = HistoryStore::in_memory()?;
    store.initialize_schema().await?;
    let provider = MockProvider::replying("ok");
    let screen = common::translator(&provider, &store);
    screen.set_input_text("Good night");

    for language in TargetLanguage::all() {
        screen.select_language(*language);
        screen.submit().await;
    }
    store.flush().await;

    let prompts = provider.prompts();
    let rows = common::history_rows(&store);
    assert_eq!(prompts.len(), TargetLanguage::all().len());
    assert_eq!(rows.len(), TargetLanguage::all().len());

    for ((language, prompt), row) in TargetLanguage::all().iter().zip(&prompts).zip(&rows) {
        assert!(prompt.contains(&format!("Translate this text to {}.", language.value())));
        assert_eq!(row.record.target_language, language.value());
    }
    Ok(())
}

/// Re-initializing the schema of an existing database keeps one table and its rows
#[tokio::test]
async fn test_initializeSchema_onReopenedFile_shouldBeIdempotent() -> Result<()> {
    let dir = common::create_temp_dir()?;
    {
        let store = common::create_file_store(&dir).await?;
        store.initialize_schema().await?;
        let screen = common::translator(&MockProvider::replying("ok"), &store);
        screen.set_input_text("Hello");
        screen.submit().await;
        store.flush().await;
    }

    let reopened = common::create_file_store(&dir).await?;

    let (tables, columns) = reopened
        .connection()
        .expect("SQLite backend")
        .execute(|conn| {
            let tables: i64 = conn.query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='translations'",
                [],
                |row| row.get(0),
            )?;
            let columns = tractree::database::schema::table_columns(conn, "translations")?;
            Ok((tables, columns))
        })?;

    assert_eq!(tables, 1);
    assert_eq!(columns, vec!["id", "english", "translated", "language"]);
    assert_eq!(common::history_rows(&reopened).len(), 1);
    Ok(())
}

/// Without an embedded database the flow still translates and displays
#[tokio::test]
async fn test_translate_onUnsupportedRuntime_shouldStillDisplay() -> Result<()> {
    let store = HistoryStore::unsupported();
    store.initialize_schema().await?;
    let screen = common::translator(&MockProvider::replying("\"ನಮಸ್ಕಾರ\""), &store);

    screen.set_input_text("Hello");
    let submission = screen.submit().await;

    match submission {
        Submission::Translated { persisted, .. } => persisted.await?,
        other => panic!("expected a translation, got {:?}", other),
    }
    assert_eq!(screen.display_text().as_deref(), Some("ನಮಸ್ಕಾರ"));
    assert!(store.connection().is_none());
    Ok(())
}
