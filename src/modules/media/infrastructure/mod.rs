pub mod http_image_encoder;

pub use http_image_encoder::HttpImageEncoder;
