pub mod image_encoder;

pub use image_encoder::ImageEncoder;
#[cfg(test)]
pub use image_encoder::MockImageEncoder;
