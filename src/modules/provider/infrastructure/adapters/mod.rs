pub mod tmdb;

pub use tmdb::{TmdbAdapter, TmdbMapper};
