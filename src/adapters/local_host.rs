use crate::domain::model::ImageFile;
use crate::domain::ports::ImageHost;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes images under a base directory and returns a URL built from the
/// configured public base, mirroring a blob-store upload route.
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    base_dir: PathBuf,
    public_base_url: String,
}

impl LocalObjectStore {
    pub fn new(base_dir: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            public_base_url: public_base_url.into(),
        }
    }

    fn object_name(filename: &str) -> String {
        let sanitized: String = filename
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}-{}", Utc::now().timestamp_millis(), sanitized)
    }
}

#[async_trait]
impl ImageHost for LocalObjectStore {
    async fn upload(&self, image: &ImageFile) -> Result<String> {
        let object_name = Self::object_name(&image.filename);
        let full_path = Path::new(&self.base_dir).join(&object_name);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full_path, &image.bytes)?;

        let url = format!(
            "{}/{}",
            self.public_base_url.trim_end_matches('/'),
            object_name
        );
        tracing::debug!(path = %full_path.display(), %url, "stored image locally");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_name_sanitizes_filename() {
        let name = LocalObjectStore::object_name("my photo (1).png");
        assert!(name.ends_with("my_photo__1_.png"));
        assert!(!name.contains(' '));
    }
}
