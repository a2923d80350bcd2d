use crate::modules::movie::domain::value_objects::{EncodedImage, ImageUpload};
use crate::shared::errors::EncodingError;
use async_trait::async_trait;

/// Turns image sources into bytes ready for storage
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageEncoder: Send + Sync {
    /// Encode an uploaded file, keeping the MIME type it was uploaded with
    async fn encode(&self, upload: &ImageUpload) -> Result<EncodedImage, EncodingError>;

    /// Fetch an image by URL and return its bytes
    async fn encode_from_url(&self, url: &str) -> Result<Vec<u8>, EncodingError>;
}
