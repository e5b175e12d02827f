use crate::Generator;
use std::sync::atomic::{AtomicU64, Ordering};
use tinylink_core::shortcode::MAX_LENGTH;
use tinylink_core::{ShortCode, ShortenerError};

/// Number of digits the counter is zero-padded to.
const COUNTER_WIDTH: usize = 6;

/// Longest prefix that still leaves room for a fully padded counter.
pub const MAX_PREFIX_LENGTH: usize = MAX_LENGTH - COUNTER_WIDTH;

/// A short code generator using a sequential counter.
///
/// Produces codes like "tl000000", "tl000001", etc. Codes are unique within
/// a single instance without touching storage, but they are predictable,
/// so this is meant for single-node setups and tests.
///
/// Once the counter outgrows the code length limit, `generate` returns
/// `ShortenerError::InvalidShortCode` instead of handing out a code that
/// could never be resolved.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
}

impl SeqGenerator {
    /// Creates a sequential generator starting at zero.
    pub fn with_prefix(prefix: impl Into<String>) -> Result<Self, ShortenerError> {
        Self::with_offset(prefix, 0)
    }

    /// Creates a sequential generator starting from a specific counter value.
    ///
    /// Useful for resuming after a known number of codes were handed out.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Result<Self, ShortenerError> {
        let prefix = prefix.into();
        Self::validate_prefix(&prefix)?;
        Ok(Self {
            counter: AtomicU64::new(offset),
            prefix,
        })
    }

    /// Checks that `prefix` only uses `[A-Za-z0-9_-]` and is at most
    /// [`MAX_PREFIX_LENGTH`] characters long.
    pub fn validate_prefix(prefix: &str) -> Result<(), ShortenerError> {
        if prefix.len() > MAX_PREFIX_LENGTH {
            return Err(ShortenerError::InvalidShortCode(format!(
                "generator prefix must be at most {} characters, got {}",
                MAX_PREFIX_LENGTH,
                prefix.len()
            )));
        }

        if !prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ShortenerError::InvalidShortCode(format!(
                "generator prefix must contain only alphanumeric characters, hyphens, or underscores: '{}'",
                prefix
            )));
        }

        Ok(())
    }
}

impl Generator for SeqGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Result<Self::Output, ShortenerError> {
        let count = self.counter.fetch_add(1, Ordering::Relaxed);
        ShortCode::new(format!(
            "{}{:0width$}",
            self.prefix,
            count,
            width = COUNTER_WIDTH
        ))
    }
}
