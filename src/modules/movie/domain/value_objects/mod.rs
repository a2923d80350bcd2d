mod encoded_image;
mod movie_rating;

pub use encoded_image::{EncodedImage, ImageUpload};
pub use movie_rating::MovieRating;
