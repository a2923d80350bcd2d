pub mod adapter;
pub mod builders;
pub mod mapper;
pub mod models;
pub mod rating;

pub use adapter::TmdbAdapter;
pub use mapper::TmdbMapper;
pub use models::{MovieDetail, MovieSummary};
pub use rating::RatingResolver;
