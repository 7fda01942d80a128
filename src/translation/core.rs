/*!
 * Core translation client implementation.
 *
 * This module contains the TranslationClient struct, which turns a source
 * text and a target language into a cleaned-up translation using any
 * [`Provider`].
 */

use log::{debug, error};
use std::sync::Arc;
use std::time::Instant;

use crate::errors::{ProviderError, TranslationError};
use crate::language::TargetLanguage;
use crate::providers::Provider;
use super::formatting::clean_response;
use super::prompts::PromptTemplate;

/// Translation client over a generative-text provider
///
/// One call issues exactly one provider request. Nothing is retried.
#[derive(Debug)]
pub struct TranslationClient<P: Provider> {
    /// Provider shared with every screen that translates
    provider: Arc<P>,
    /// Directive template
    template: PromptTemplate,
}

impl<P: Provider> Clone for TranslationClient<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            template: self.template.clone(),
        }
    }
}

impl<P: Provider> TranslationClient<P> {
    /// Create a client with the default directive
    pub fn new(provider: P) -> Self {
        Self::from_shared(Arc::new(provider))
    }

    /// Create a client over an already shared provider
    pub fn from_shared(provider: Arc<P>) -> Self {
        Self {
            provider,
            template: PromptTemplate::default(),
        }
    }

    /// Replace the directive template
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// The underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Translate `text` into `language`
    ///
    /// On success the result has no outer whitespace and no matching
    /// surrounding quotes. Failures are logged here with their upstream
    /// detail; callers only need to know that the translation failed.
    pub async fn translate(&self, text: &str, language: TargetLanguage) -> Result<String, TranslationError> {
        let directive = self.template.render(text, language);
        let request = self.provider.build_request(&directive);

        let start = Instant::now();
        let response = self.provider.complete(request).await.map_err(|e| {
            error!("Translation to {} failed: {}", language.value(), e);
            TranslationError::from(e)
        })?;

        let raw = P::extract_text(&response);
        let cleaned = clean_response(&raw);
        debug!(
            "Translated {} chars to {} in {:?}",
            text.chars().count(),
            language.value(),
            start.elapsed()
        );

        if cleaned.is_empty() {
            error!("Provider output for {} was empty after cleanup: {:?}", language.value(), raw);
            return Err(TranslationError::Provider(ProviderError::EmptyResponse));
        }

        Ok(cleaned)
    }
}
