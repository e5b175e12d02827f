mod health;
mod url;

pub use self::health::health_handler;
pub use self::url::{resolve_shorten_segment_handler, resolve_url_handler, shorten_url_handler};
