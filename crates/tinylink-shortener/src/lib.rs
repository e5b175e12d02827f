//! URL shortener service implementation.
//!
//! [`ShortenerService`] combines a [`Repository`](tinylink_core::Repository)
//! and a [`Generator`](tinylink_generator::Generator) into the mapping store
//! behind [`Shortener`]. Core types are re-exported from `tinylink_core`.

pub mod service;

pub use service::{ShortenerService, ShortenerSettings, DEFAULT_MAX_ATTEMPTS};
pub use tinylink_core::{Shortener, ShortenerError};
