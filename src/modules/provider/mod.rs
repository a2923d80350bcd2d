pub mod domain;
pub mod infrastructure;

pub use domain::MovieProviderRepository;
pub use infrastructure::adapters::tmdb::{MovieDetail, MovieSummary, TmdbAdapter, TmdbMapper};
