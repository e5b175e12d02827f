use async_trait::async_trait;
use std::sync::Arc;
use tinylink_core::{
    ReadRepository, Repository, ShortCode, Shortener, ShortenerError, StorageError, UrlRecord,
};
use tinylink_generator::Generator;
use tracing::{debug, error, trace, warn};
use typed_builder::TypedBuilder;

/// Draws allowed per `shorten` call before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Settings for a [`ShortenerService`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct ShortenerSettings {
    /// Prefix for returned short URLs, e.g. `http://localhost:5000`.
    #[builder(setter(into))]
    pub domain_url: String,
    /// Upper bound on generation attempts when candidates collide.
    ///
    /// Values below 1 are treated as 1.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
}

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator`. Every generated code
/// is registered with an atomic insert-if-absent; when the code is already
/// taken a fresh one is drawn, up to `max_attempts` times.
#[derive(Debug, Clone)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    settings: ShortenerSettings,
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    pub fn new(repository: R, generator: G, settings: ShortenerSettings) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            settings,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn settings(&self) -> &ShortenerSettings {
        &self.settings
    }

    fn generate_code(&self) -> Result<ShortCode, ShortenerError> {
        self.generator.generate().map(Into::into)
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, original_url: &str) -> Result<String, ShortenerError> {
        let max_attempts = self.settings.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            let code = self.generate_code().inspect_err(|err| {
                error!(error = %err, attempt, "generator failed to produce a short code");
            })?;

            match self
                .repository
                .insert(&code, UrlRecord::new(original_url))
                .await
            {
                Ok(()) => {
                    debug!(code = %code, attempt, url = %original_url, "registered short code");
                    return Ok(code.to_url(&self.settings.domain_url));
                }
                Err(StorageError::Conflict(_)) => {
                    warn!(code = %code, attempt, max_attempts, "short code collision, drawing again");
                }
                Err(other) => return Err(other.into()),
            }
        }

        error!(attempts = max_attempts, "every generated short code collided");
        Err(ShortenerError::GenerationExhausted {
            attempts: max_attempts,
        })
    }

    async fn resolve(&self, short_id: &str) -> Result<String, ShortenerError> {
        // Malformed input can never have been registered.
        let Ok(code) = ShortCode::new(short_id) else {
            trace!(short_id, "rejecting malformed short code");
            return Err(ShortenerError::NotFound(short_id.to_owned()));
        };

        match self.repository.get(&code).await? {
            Some(record) => {
                trace!(code = %code, url = %record.original_url, "resolved short code");
                Ok(record.original_url)
            }
            None => {
                trace!(code = %code, "short code not found");
                Err(ShortenerError::NotFound(short_id.to_owned()))
            }
        }
    }
}
