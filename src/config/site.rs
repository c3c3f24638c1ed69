use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_required_field,
    validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Site configuration loaded from a TOML file.
///
/// The active storage backend is an explicit value here and gets resolved
/// once at construction time; nothing reads it as process-global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub storage: StorageConfig,
    pub blog: BlogConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProvider {
    /// Local object store: files on disk served from a public base URL.
    Local,
    /// ImgBB-style third-party image hosting API.
    Imgbb,
    /// Inline base64 data URLs, no external storage at all.
    Inline,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub provider: StorageProvider,
    pub local: Option<LocalStoreConfig>,
    pub imgbb: Option<ImgBbConfig>,
    pub inline: Option<InlineConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStoreConfig {
    pub base_dir: String,
    pub public_base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImgBbConfig {
    pub api_key: String,
    /// Override for tests; defaults to the public ImgBB endpoint.
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineConfig {
    /// Cap on the base64-encoded payload size (document stores have hard
    /// per-document limits).
    pub max_encoded_bytes: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogConfig {
    pub content_dir: String,
    pub default_image_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        // Inline storage works with zero setup.
        Self {
            storage: StorageConfig {
                provider: StorageProvider::Inline,
                local: None,
                imgbb: None,
                inline: None,
            },
            blog: BlogConfig {
                content_dir: "./content/blogs".to_string(),
                default_image_url: None,
            },
        }
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${IMGBB_API_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_path("blog.content_dir", &self.blog.content_dir)?;
        if let Some(url) = &self.blog.default_image_url {
            validate_url("blog.default_image_url", url)?;
        }

        match self.storage.provider {
            StorageProvider::Local => {
                let local = validate_required_field("storage.local", &self.storage.local)?;
                validate_path("storage.local.base_dir", &local.base_dir)?;
                validate_url("storage.local.public_base_url", &local.public_base_url)?;
            }
            StorageProvider::Imgbb => {
                let imgbb = validate_required_field("storage.imgbb", &self.storage.imgbb)?;
                validate_non_empty_string("storage.imgbb.api_key", &imgbb.api_key)?;
                if imgbb.api_key.starts_with("${") {
                    return Err(SiteError::InvalidConfigValueError {
                        field: "storage.imgbb.api_key".to_string(),
                        value: imgbb.api_key.clone(),
                        reason: "Environment variable was not substituted".to_string(),
                    });
                }
                if let Some(endpoint) = &imgbb.endpoint {
                    validate_url("storage.imgbb.endpoint", endpoint)?;
                }
            }
            StorageProvider::Inline => {
                if let Some(inline) = &self.storage.inline {
                    if let Some(max) = inline.max_encoded_bytes {
                        validate_positive_number("storage.inline.max_encoded_bytes", max, 1)?;
                    }
                }
            }
        }

        Ok(())
    }
}
