/*!
 * Translation client for the translator screen.
 *
 * - `core`: `TranslationClient`, one provider call per translation
 * - `prompts`: the directive sent to the provider
 * - `formatting`: cleanup of raw provider output
 */

pub use self::core::TranslationClient;
pub use self::formatting::clean_response;
pub use self::prompts::{build_directive, PromptTemplate};

pub mod core;
pub mod formatting;
pub mod prompts;
