use crate::domain::model::ImageFile;
use crate::domain::ports::ImageHost;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Keeps the encoded payload within a typical document-store limit.
const DEFAULT_MAX_ENCODED_BYTES: usize = 1024 * 1024;

const FALLBACK_CONTENT_TYPE: &str = "image/jpeg";

/// Zero-setup backend: encodes the image as a `data:` URL instead of
/// uploading it anywhere.
#[derive(Debug, Clone)]
pub struct InlineDataHost {
    max_encoded_bytes: usize,
}

impl InlineDataHost {
    pub fn new() -> Self {
        Self {
            max_encoded_bytes: DEFAULT_MAX_ENCODED_BYTES,
        }
    }

    pub fn with_max_encoded_bytes(max_encoded_bytes: usize) -> Self {
        Self { max_encoded_bytes }
    }
}

impl Default for InlineDataHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageHost for InlineDataHost {
    async fn upload(&self, image: &ImageFile) -> Result<String> {
        let encoded = BASE64.encode(&image.bytes);
        if encoded.len() > self.max_encoded_bytes {
            return Err(SiteError::UploadError {
                message: format!(
                    "encoded image is {} bytes, exceeds inline limit of {}",
                    encoded.len(),
                    self.max_encoded_bytes
                ),
            });
        }

        let content_type = if image.content_type.is_empty() {
            FALLBACK_CONTENT_TYPE
        } else {
            &image.content_type
        };
        Ok(format!("data:{};base64,{}", content_type, encoded))
    }
}
