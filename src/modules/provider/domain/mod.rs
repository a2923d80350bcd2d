pub mod repositories;

pub use repositories::MovieProviderRepository;
#[cfg(test)]
pub use repositories::MockMovieProviderRepository;
