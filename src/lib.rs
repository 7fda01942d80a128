/*!
 * # Tractree screens
 *
 * Business logic behind two screens of the Tractree mobile app, consumed
 * by a host application shell that owns rendering and navigation.
 *
 * ## Features
 *
 * - Storefront home screen with a static demo catalog and category /
 *   navigation-tab selection
 * - Translator screen that translates free text through the Gemini API
 * - Append-only SQLite log of successful translations, degrading to a
 *   no-op where no embedded database is available
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app`: `AppContext`, which builds the shared collaborators at startup
 * - `app_config`: Configuration management
 * - `screens`: Screen state and flows:
 *   - `screens::storefront`: Storefront catalog and selection state
 *   - `screens::translator`: Translate-display-persist flow
 * - `translation`: Directive building, response cleanup and the client
 * - `providers`: Client implementations for text-generation providers:
 *   - `providers::gemini`: Gemini API client
 *   - `providers::mock`: Scripted provider for tests
 * - `database`: Translation history store
 * - `language`: Target language enumeration
 * - `logging`: stderr backend for the `log` facade
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app;
pub mod app_config;
pub mod database;
pub mod errors;
pub mod language;
pub mod logging;
pub mod providers;
pub mod screens;
pub mod translation;

// Re-export main types for easier usage
pub use app::AppContext;
pub use app_config::Config;
pub use database::{HistoryStore, TranslationRecord};
pub use language::TargetLanguage;
pub use screens::{Category, NavTab, StorefrontScreen, Submission, TranslatorScreen};
pub use translation::TranslationClient;
pub use errors::{AppError, ProviderError, SelectionError, StoreError, TranslationError};
