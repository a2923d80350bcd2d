mod app_error;
mod mapping_error;

pub use app_error::{AppError, AppResult};
pub use mapping_error::{EncodingError, MappingError, ParseError, RatingResolutionError};
