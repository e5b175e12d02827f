pub mod random;
pub mod seq;

pub use random::RandomGenerator;
pub use seq::SeqGenerator;

use tinylink_core::{ShortCode, ShortenerError};

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// A generated code is only a candidate: the caller registers it with an
/// insert-if-absent and draws again on conflict.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;
    /// Generates a type that can be converted into a short code.
    ///
    /// Every `Ok` output must be a valid [`ShortCode`]. A generator that can
    /// no longer produce one returns `Err` instead.
    fn generate(&self) -> Result<Self::Output, ShortenerError>;
}
