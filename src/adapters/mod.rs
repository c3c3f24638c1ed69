// Adapters layer: concrete implementations of the storage ports.

pub mod imgbb;
pub mod inline;
pub mod json_store;
pub mod local_host;

use crate::config::site::{StorageConfig, StorageProvider};
use crate::domain::ports::ImageHost;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::validate_required_field;

pub use imgbb::ImgBbHost;
pub use inline::InlineDataHost;
pub use json_store::JsonFileStore;
pub use local_host::LocalObjectStore;

/// Resolves the configured storage provider into a concrete image host.
/// Called once at construction; the choice never lives in global state.
pub fn image_host_from_config(config: &StorageConfig) -> Result<Box<dyn ImageHost>> {
    match config.provider {
        StorageProvider::Local => {
            let local = validate_required_field("storage.local", &config.local)?;
            Ok(Box::new(LocalObjectStore::new(
                local.base_dir.clone(),
                local.public_base_url.clone(),
            )))
        }
        StorageProvider::Imgbb => {
            let imgbb = validate_required_field("storage.imgbb", &config.imgbb)?;
            if imgbb.api_key.trim().is_empty() {
                return Err(SiteError::MissingConfigError {
                    field: "storage.imgbb.api_key".to_string(),
                });
            }
            Ok(match &imgbb.endpoint {
                Some(endpoint) => Box::new(ImgBbHost::with_endpoint(&imgbb.api_key, endpoint)),
                None => Box::new(ImgBbHost::new(&imgbb.api_key)),
            })
        }
        StorageProvider::Inline => {
            let host = match config.inline.as_ref().and_then(|i| i.max_encoded_bytes) {
                Some(max) => InlineDataHost::with_max_encoded_bytes(max),
                None => InlineDataHost::new(),
            };
            Ok(Box::new(host))
        }
    }
}
