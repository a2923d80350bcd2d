pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{ActorService, ImportOutcome, MovieEdit, MovieService, NewMovieInput};
pub use domain::{ActorDetail, Movie, MovieRating, MovieRepository};
pub use infrastructure::MovieRepositoryImpl;
