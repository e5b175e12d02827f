use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Registers `original_url` under a freshly generated short code and
    /// returns the full short URL.
    ///
    /// The URL is expected to be validated by the caller. Shortening the
    /// same URL twice yields two distinct short URLs.
    async fn shorten(&self, original_url: &str) -> Result<String>;

    /// Resolves a short code to the original URL.
    ///
    /// Returns `Err(ShortenerError::NotFound)` for any input that is not a
    /// registered code, including strings that could never be one.
    async fn resolve(&self, short_id: &str) -> Result<String>;
}
