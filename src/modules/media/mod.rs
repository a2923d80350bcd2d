pub mod domain;
pub mod infrastructure;

pub use domain::ImageEncoder;
pub use infrastructure::HttpImageEncoder;
