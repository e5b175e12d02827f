//! HTTP gateway for the tinylink shortener.
//!
//! Validates incoming URLs, calls the [`Shortener`](tinylink_core::Shortener)
//! held in [`AppState`], and maps its errors onto HTTP status codes.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
