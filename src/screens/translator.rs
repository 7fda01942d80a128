/*!
 * Translator screen.
 *
 * Holds the transient screen state (input text, picked language, shown
 * result) and runs the translate flow: one provider call, cleanup, display
 * update, then a detached append to the history store.
 *
 * A second submit while a translation is pending is refused with
 * [`Submission::Busy`]; hosts disable the Translate control while
 * [`TranslatorScreen::is_pending`] is true.
 */

use log::{debug, info};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::database::{HistoryStore, TranslationRecord};
use crate::errors::SelectionError;
use crate::language::TargetLanguage;
use crate::providers::Provider;
use crate::translation::TranslationClient;

/// Text shown in place of a result when translation fails
pub const TRANSLATION_FAILED_MESSAGE: &str = "Error translating text.";

/// Snapshot of the translator screen state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslatorState {
    /// Text typed by the user
    pub input_text: String,
    /// Language picked in the selector
    pub target_language: TargetLanguage,
    /// Result line; empty means hidden
    pub translated_text: String,
    /// A translation request is in flight
    pub pending: bool,
}

/// Outcome of a submit
#[derive(Debug)]
pub enum Submission {
    /// Another translation was still pending; nothing was sent
    Busy,
    /// The provider call failed; the fallback message is shown
    Failed,
    /// The translation is shown and its history append was started
    Translated {
        /// Cleaned translation
        text: String,
        /// Detached append; awaiting it only sequences, it carries no error
        persisted: JoinHandle<()>,
    },
}

/// Clears the pending flag if a submit is abandoned mid-flight
struct PendingReset<'a> {
    state: &'a Mutex<TranslatorState>,
    armed: bool,
}

impl Drop for PendingReset<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.state.lock().pending = false;
        }
    }
}

/// Translator screen bound to a translation client and a history store
///
/// Clones share state, so a host can keep one handle for rendering and
/// another for a spawned submit.
#[derive(Debug)]
pub struct TranslatorScreen<P: Provider> {
    client: TranslationClient<P>,
    store: HistoryStore,
    state: Arc<Mutex<TranslatorState>>,
}

impl<P: Provider> Clone for TranslatorScreen<P> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            store: self.store.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<P: Provider> TranslatorScreen<P> {
    /// Fresh screen with Kannada preselected
    pub fn new(client: TranslationClient<P>, store: HistoryStore) -> Self {
        Self::with_default_language(client, store, TargetLanguage::default())
    }

    /// Fresh screen with `language` preselected
    pub fn with_default_language(
        client: TranslationClient<P>,
        store: HistoryStore,
        language: TargetLanguage,
    ) -> Self {
        Self {
            client,
            store,
            state: Arc::new(Mutex::new(TranslatorState {
                target_language: language,
                ..TranslatorState::default()
            })),
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> TranslatorState {
        self.state.lock().clone()
    }

    pub fn input_text(&self) -> String {
        self.state.lock().input_text.clone()
    }

    pub fn target_language(&self) -> TargetLanguage {
        self.state.lock().target_language
    }

    pub fn is_pending(&self) -> bool {
        self.state.lock().pending
    }

    /// Whether the Translate control should be enabled
    pub fn can_submit(&self) -> bool {
        !self.is_pending()
    }

    /// The result line, or `None` while it is hidden
    pub fn display_text(&self) -> Option<String> {
        let state = self.state.lock();
        if state.translated_text.is_empty() {
            None
        } else {
            Some(state.translated_text.clone())
        }
    }

    pub fn set_input_text(&self, text: impl Into<String>) {
        self.state.lock().input_text = text.into();
    }

    pub fn select_language(&self, language: TargetLanguage) {
        language.warn_if_unconventional();
        self.state.lock().target_language = language;
    }

    /// Select by label or data value; unknown values leave the state unchanged
    pub fn select_language_named(&self, name: &str) -> Result<(), SelectionError> {
        let language = name.parse::<TargetLanguage>()?;
        self.select_language(language);
        Ok(())
    }

    /// Translate the current input into the current language
    pub async fn submit(&self) -> Submission {
        let (text, language) = {
            let mut state = self.state.lock();
            if state.pending {
                debug!("Translate pressed while a translation is pending; ignoring");
                return Submission::Busy;
            }
            state.pending = true;
            (state.input_text.clone(), state.target_language)
        };
        let mut reset = PendingReset { state: &self.state, armed: true };

        let outcome = self.client.translate(&text, language).await;

        let translated = {
            let mut state = self.state.lock();
            state.pending = false;
            reset.armed = false;
            match outcome {
                Ok(translated) => {
                    state.translated_text = translated.clone();
                    translated
                }
                Err(_) => {
                    state.translated_text = TRANSLATION_FAILED_MESSAGE.to_string();
                    return Submission::Failed;
                }
            }
        };

        info!("Translated input into {}", language.value());
        let persisted = self
            .store
            .append_detached(TranslationRecord::new(text, translated.clone(), language));

        Submission::Translated { text: translated, persisted }
    }
}
