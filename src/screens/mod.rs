/*!
 * The two screens of the app. They share nothing with each other.
 *
 * - `storefront`: static catalog with category and nav-tab selection
 * - `translator`: text translation with history logging
 */

pub mod storefront;
pub mod translator;

pub use storefront::{Category, NavTab, StorefrontCatalog, StorefrontScreen};
pub use translator::{Submission, TranslatorScreen, TranslatorState, TRANSLATION_FAILED_MESSAGE};
