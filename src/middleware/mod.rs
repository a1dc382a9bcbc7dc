mod auth;
mod error_handler;
mod rate_limit;
mod rewrite;

pub use auth::auth_middleware;
pub use error_handler::log_errors;
pub use rate_limit::{RateLimiter, rate_limit};
pub use rewrite::{rewrite_legacy_paths, rewrite_path};
