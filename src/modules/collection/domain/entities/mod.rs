pub mod collection;

pub use collection::{Collection, CollectionMovie};
