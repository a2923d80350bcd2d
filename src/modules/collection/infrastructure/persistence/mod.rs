pub mod collection_repository_impl;

pub use collection_repository_impl::CollectionRepositoryImpl;
