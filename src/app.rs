/*!
 * Application context.
 *
 * Builds the collaborators the screens share (config, history store and
 * translation client) once at startup, and drains the store at shutdown.
 */

use log::{debug, info, warn};

use crate::app_config::Config;
use crate::database::HistoryStore;
use crate::errors::AppError;
use crate::logging;
use crate::providers::gemini::Gemini;
use crate::providers::Provider;
use crate::screens::{StorefrontScreen, TranslatorScreen};
use crate::translation::TranslationClient;

/// Collaborators built once at startup and handed to the screens
///
/// The history store lives here rather than in a global: it is opened in
/// [`AppContext::start`] and drained in [`AppContext::shutdown`].
pub struct AppContext<P: Provider = Gemini> {
    // @field: App configuration
    config: Config,
    // @field: Shared history store
    store: HistoryStore,
    // @field: Shared translation client
    client: TranslationClient<P>,
}

impl AppContext<Gemini> {
    /// Start with the Gemini provider described by `config`
    ///
    /// Environment credentials override the file value before validation.
    pub async fn start(mut config: Config) -> Result<Self, AppError> {
        config.apply_env_overrides();
        let provider = Gemini::from_config(&config.provider);
        Self::start_with_provider(config, provider).await
    }
}

impl<P: Provider> AppContext<P> {
    /// Start with an explicit provider
    pub async fn start_with_provider(config: Config, provider: P) -> Result<Self, AppError> {
        config
            .validate()
            .map_err(|e| AppError::Config(format!("{:#}", e)))?;

        if !logging::init(config.log_level.to_level_filter()) {
            debug!("A logger is already installed; keeping its level");
        }

        let store = HistoryStore::open_or_degrade(&config.store);
        if let Err(e) = store.initialize_schema().await {
            warn!("Translation history schema could not be created: {}", e);
        }

        info!(
            "App context ready (history {})",
            if store.is_supported() { "enabled" } else { "disabled" }
        );

        Ok(Self {
            config,
            store,
            client: TranslationClient::new(provider),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    /// A translator screen wired to the shared client and store
    pub fn translator_screen(&self) -> TranslatorScreen<P> {
        TranslatorScreen::with_default_language(
            self.client.clone(),
            self.store.clone(),
            self.config.translator.default_language,
        )
    }

    /// A storefront screen with the demo catalog
    pub fn storefront_screen(&self) -> StorefrontScreen {
        StorefrontScreen::new()
    }

    /// Wait for outstanding history appends, then release the store
    pub async fn shutdown(self) {
        self.store.flush().await;
        info!("App context shut down");
    }
}
