/*!
 * Tests for error types and conversions
 */

use tractree::errors::{AppError, ProviderError, SelectionError, StoreError, TranslationError};

#[test]
fn test_providerError_apiError_shouldDisplayStatusAndMessage() {
    let error = ProviderError::ApiError {
        status_code: 500,
        message: "Internal".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("500"));
    assert!(display.contains("Internal"));
}

#[test]
fn test_providerError_rateLimitExceeded_shouldDisplayCorrectly() {
    let error = ProviderError::RateLimitExceeded("Quota exceeded".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Rate limit exceeded"));
    assert!(display.contains("Quota exceeded"));
}

#[test]
fn test_translationError_fromProviderError_shouldWrapCorrectly() {
    let provider_error = ProviderError::ConnectionError("Host unreachable".to_string());
    let translation_error: TranslationError = provider_error.into();
    let display = format!("{}", translation_error);
    assert!(display.contains("Provider error"));
    assert!(display.contains("Host unreachable"));
}

#[test]
fn test_storeError_fromRusqliteError_shouldBeDatabaseError() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    let sql_error = conn.execute("INSERT INTO missing_table VALUES (1)", []).unwrap_err();

    let store_error: StoreError = sql_error.into();

    assert!(matches!(store_error, StoreError::Database(ref m) if m.contains("missing_table")));
}

#[test]
fn test_selectionError_shouldNameKindAndValue() {
    let error = SelectionError::InvalidSelection {
        kind: "category",
        value: "Harvesters".to_string(),
    };
    assert_eq!(format!("{}", error), "Invalid category selection: \"Harvesters\"");
}

#[test]
fn test_appError_fromStoreError_shouldWrapCorrectly() {
    let app_error: AppError = StoreError::Database("disk I/O error".to_string()).into();
    let display = format!("{}", app_error);
    assert!(display.contains("Store error"));
    assert!(display.contains("disk I/O error"));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("File not found"));
}
