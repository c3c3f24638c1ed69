use crate::domain::model::{BlogPost, ImageFile};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Storage backend for post images: takes a file, returns a usable URL
/// (hosted http(s) URL or inline data URL, depending on the backend).
#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(&self, image: &ImageFile) -> Result<String>;
}

#[async_trait]
impl ImageHost for Box<dyn ImageHost> {
    async fn upload(&self, image: &ImageFile) -> Result<String> {
        (**self).upload(image).await
    }
}

/// Document store for blog posts. Listing is newest-first by `created_at`.
#[async_trait]
pub trait BlogStore: Send + Sync {
    async fn insert(&self, post: &BlogPost) -> Result<()>;
    async fn get(&self, id: &str) -> Result<Option<BlogPost>>;
    async fn list(&self) -> Result<Vec<BlogPost>>;
    async fn update(&self, post: &BlogPost) -> Result<()>;
}
