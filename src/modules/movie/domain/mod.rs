pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::{ActorDetail, CastMember, CrewMember, Movie};
pub use repositories::MovieRepository;
pub use value_objects::{EncodedImage, ImageUpload, MovieRating};
