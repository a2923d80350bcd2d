pub mod actor_service;
pub mod service;

pub use actor_service::ActorService;
pub use service::{ImportOutcome, MovieEdit, MovieService, NewMovieInput};
