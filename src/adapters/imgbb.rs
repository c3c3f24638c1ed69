use crate::domain::model::ImageFile;
use crate::domain::ports::ImageHost;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;

const IMGBB_UPLOAD_ENDPOINT: &str = "https://api.imgbb.com/1/upload";

/// ImgBB image hosting API: POSTs the base64-encoded image as form data and
/// returns the hosted URL from the JSON response.
#[derive(Debug, Clone)]
pub struct ImgBbHost {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl ImgBbHost {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, IMGBB_UPLOAD_ENDPOINT)
    }

    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// The response nests the URL in several possible places depending on the
    /// upload; take the first that is present.
    fn extract_url(body: &serde_json::Value) -> Option<String> {
        let data = body.get("data")?;
        for candidate in [
            data.get("url"),
            data.get("display_url"),
            data.get("image").and_then(|i| i.get("url")),
        ] {
            if let Some(url) = candidate.and_then(|v| v.as_str()) {
                return Some(url.to_string());
            }
        }
        None
    }
}

#[async_trait]
impl ImageHost for ImgBbHost {
    async fn upload(&self, image: &ImageFile) -> Result<String> {
        let encoded = BASE64.encode(&image.bytes);

        let form = reqwest::multipart::Form::new()
            .text("key", self.api_key.clone())
            .text("image", encoded);

        tracing::debug!(endpoint = %self.endpoint, filename = %image.filename, "uploading image to ImgBB");
        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SiteError::UploadError {
                message: format!("ImgBB returned status {}", status),
            });
        }

        let body: serde_json::Value = response.json().await?;
        Self::extract_url(&body).ok_or_else(|| {
            tracing::error!(%body, "ImgBB response carried no URL");
            SiteError::UploadError {
                message: "ImgBB upload failed: no valid URL returned".to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_url_prefers_direct_url() {
        let body = json!({"data": {"url": "https://i.ibb.co/a.png", "display_url": "https://i.ibb.co/b.png"}});
        assert_eq!(
            ImgBbHost::extract_url(&body).as_deref(),
            Some("https://i.ibb.co/a.png")
        );
    }

    #[test]
    fn test_extract_url_falls_back_to_nested_image() {
        let body = json!({"data": {"image": {"url": "https://i.ibb.co/c.png"}}});
        assert_eq!(
            ImgBbHost::extract_url(&body).as_deref(),
            Some("https://i.ibb.co/c.png")
        );
    }

    #[test]
    fn test_extract_url_missing() {
        assert_eq!(ImgBbHost::extract_url(&json!({"data": {}})), None);
        assert_eq!(ImgBbHost::extract_url(&json!({"success": false})), None);
    }
}
