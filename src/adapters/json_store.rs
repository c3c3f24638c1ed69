use crate::domain::model::BlogPost;
use crate::domain::ports::BlogStore;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// One JSON document per post under a base directory. Stands in for the
/// hosted document store in local and test deployments.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn post_path(&self, id: &str) -> PathBuf {
        Path::new(&self.base_dir).join(format!("{}.json", id))
    }
}

#[async_trait]
impl BlogStore for JsonFileStore {
    async fn insert(&self, post: &BlogPost) -> Result<()> {
        fs::create_dir_all(&self.base_dir)?;
        let data = serde_json::to_vec_pretty(post)?;
        fs::write(self.post_path(&post.id), data)?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<BlogPost>> {
        let path = self.post_path(id);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read(path)?;
        let post = serde_json::from_slice(&data)?;
        Ok(Some(post))
    }

    async fn list(&self) -> Result<Vec<BlogPost>> {
        if !self.base_dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let data = fs::read(&path)?;
            match serde_json::from_slice::<BlogPost>(&data) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable post document");
                }
            }
        }

        // Newest first; id breaks created_at ties deterministically.
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(posts)
    }

    async fn update(&self, post: &BlogPost) -> Result<()> {
        let path = self.post_path(&post.id);
        if !path.exists() {
            return Err(SiteError::BlogNotFound {
                id: post.id.clone(),
            });
        }
        let data = serde_json::to_vec_pretty(post)?;
        fs::write(path, data)?;
        Ok(())
    }
}
