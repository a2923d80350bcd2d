pub mod adapters;
pub mod http_client;

pub use adapters::TmdbAdapter;
pub use http_client::{RateLimitClient, RetryPolicy};
