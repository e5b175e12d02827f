use crate::Generator;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use tinylink_core::shortcode::MIN_LENGTH;
use tinylink_core::{ShortCode, ShortenerError};
use uuid::Uuid;

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_LENGTH: usize = 8;

/// Unpadded base64 length of a 16-byte value.
const ENCODED_LENGTH: usize = 22;

/// A random short code generator.
///
/// Each code is a fresh v4 UUID encoded as URL-safe base64 and truncated,
/// so codes only ever contain `[A-Za-z0-9_-]`. At the default length of 8
/// the code carries 48 bits of the underlying randomness.
///
/// Uniqueness is probabilistic. Collisions are left to the caller.
#[derive(Debug, Clone, Copy)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
    pub fn new() -> Self {
        Self {
            length: DEFAULT_LENGTH,
        }
    }

    /// Creates a generator producing codes of `length` characters.
    ///
    /// The length is clamped to `3..=22`; 22 is the full encoding of a UUID.
    pub fn with_length(length: usize) -> Self {
        Self {
            length: length.clamp(MIN_LENGTH, ENCODED_LENGTH),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for RandomGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Result<Self::Output, ShortenerError> {
        let mut encoded = URL_SAFE_NO_PAD.encode(Uuid::new_v4().as_bytes());
        encoded.truncate(self.length);
        Ok(ShortCode::new_unchecked(encoded))
    }
}
