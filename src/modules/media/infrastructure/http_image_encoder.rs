use crate::modules::media::domain::ImageEncoder;
use crate::modules::movie::domain::value_objects::{EncodedImage, ImageUpload};
use crate::shared::errors::EncodingError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Image encoder backed by a plain HTTP download
pub struct HttpImageEncoder {
    client: Client,
}

impl HttpImageEncoder {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client for images: {}", e);
                Client::new()
            });
        Self { client }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageEncoder for HttpImageEncoder {
    async fn encode(&self, upload: &ImageUpload) -> Result<EncodedImage, EncodingError> {
        if upload.data.is_empty() {
            return Err(EncodingError::EmptyBody {
                url: upload.file_name.clone(),
            });
        }
        Ok(EncodedImage::new(
            upload.data.clone(),
            upload.content_type.clone(),
        ))
    }

    async fn encode_from_url(&self, url: &str) -> Result<Vec<u8>, EncodingError> {
        log::debug!("Fetching image {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| EncodingError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EncodingError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| EncodingError::Request {
                url: url.to_string(),
                source,
            })?;

        if bytes.is_empty() {
            return Err(EncodingError::EmptyBody {
                url: url.to_string(),
            });
        }

        Ok(bytes.to_vec())
    }
}
