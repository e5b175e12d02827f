//! Core types and traits for the tinylink URL shortener.
//!
//! This crate provides the shared vocabulary used by the generator,
//! storage, shortener and gateway crates.

pub mod error;
pub mod repository;
pub mod shortcode;
pub mod shortener;

pub use error::{ShortenerError, StorageError};
pub use repository::{ReadRepository, Repository, UrlRecord};
pub use shortcode::ShortCode;
pub use shortener::Shortener;
