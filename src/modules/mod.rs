pub mod collection;
pub mod media;
pub mod movie;
pub mod provider;
