pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::{Collection, CollectionMovie};
pub use repositories::CollectionRepository;
