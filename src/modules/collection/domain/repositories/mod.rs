pub mod collection_repository;

pub use collection_repository::CollectionRepository;
#[cfg(test)]
pub use collection_repository::MockCollectionRepository;
