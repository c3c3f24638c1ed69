use crate::core::{BlogPatch, BlogPost, BlogStore, ImageHost, ImageSource, NewBlogPost};
use crate::utils::error::{Result, SiteError};
use chrono::Utc;

const DEFAULT_IMAGE_URL: &str = "https://papex.app/blog/blog_image.png";

pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_dash = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && !slug.is_empty() {
            slug.push('-');
            last_was_dash = true;
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

fn is_inline_data(url: &str) -> bool {
    url.starts_with("data:image/")
}

fn is_hosted_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Blog content-management flow: creates and edits posts through a document
/// store, resolving images through the configured upload backend.
pub struct BlogService<S: BlogStore, H: ImageHost> {
    store: S,
    host: H,
    default_image_url: String,
}

impl<S: BlogStore, H: ImageHost> BlogService<S, H> {
    pub fn new(store: S, host: H) -> Self {
        Self::with_default_image(store, host, DEFAULT_IMAGE_URL.to_string())
    }

    pub fn with_default_image(store: S, host: H, default_image_url: String) -> Self {
        Self {
            store,
            host,
            default_image_url,
        }
    }

    /// Resolves a post image to the URL that gets persisted.
    ///
    /// Raw data-URL strings are rejected to the default image (they must not
    /// land in the document store); anything that is not an http(s) URL is a
    /// local path and equally invalid in production. Files go through the
    /// upload backend, and an upload failure is a real error.
    async fn resolve_image(&self, image: Option<&ImageSource>) -> Result<String> {
        let Some(image) = image else {
            return Ok(self.default_image_url.clone());
        };

        match image {
            ImageSource::Url(url) => {
                if is_inline_data(url) {
                    tracing::warn!("inline image data rejected, falling back to default image");
                    Ok(self.default_image_url.clone())
                } else if is_hosted_url(url) {
                    Ok(url.clone())
                } else {
                    tracing::warn!(path = %url, "local image path rejected, falling back to default image");
                    Ok(self.default_image_url.clone())
                }
            }
            ImageSource::File(file) => {
                tracing::debug!(filename = %file.filename, bytes = file.bytes.len(), "uploading post image");
                self.host.upload(file).await
            }
        }
    }

    pub async fn create(&self, post: NewBlogPost) -> Result<String> {
        let image_url = self.resolve_image(post.image.as_ref()).await?;
        let created_at = Utc::now();
        let slug = generate_slug(&post.title);
        let id = format!("{}-{}", created_at.timestamp_millis(), slug);

        let record = BlogPost {
            id: id.clone(),
            title: post.title,
            excerpt: post.excerpt,
            content: post.content,
            image_migrated: is_hosted_url(&image_url),
            image: image_url,
            slug,
            read_time: post.read_time,
            created_at,
            updated_at: None,
            published: post.published,
        };

        self.store.insert(&record).await?;
        tracing::info!(id = %record.id, slug = %record.slug, "blog post created");
        Ok(id)
    }

    pub async fn update(&self, id: &str, patch: BlogPatch) -> Result<()> {
        let mut existing = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| SiteError::BlogNotFound { id: id.to_string() })?;

        if let Some(title) = patch.title {
            existing.slug = generate_slug(&title);
            existing.title = title;
        }
        if let Some(excerpt) = patch.excerpt {
            existing.excerpt = excerpt;
        }
        if let Some(content) = patch.content {
            existing.content = content;
        }
        if let Some(read_time) = patch.read_time {
            existing.read_time = read_time;
        }
        if let Some(published) = patch.published {
            existing.published = published;
        }
        if let Some(image) = patch.image {
            let image_url = self.resolve_image(Some(&image)).await?;
            existing.image_migrated = is_hosted_url(&image_url);
            existing.image = image_url;
        }
        existing.updated_at = Some(Utc::now());

        self.store.update(&existing).await?;
        tracing::info!(id = %existing.id, "blog post updated");
        Ok(())
    }

    pub async fn get(&self, id: &str) -> Result<Option<BlogPost>> {
        self.store.get(id).await
    }

    pub async fn list(&self) -> Result<Vec<BlogPost>> {
        self.store.list().await
    }

    pub async fn list_published(&self) -> Result<Vec<BlogPost>> {
        let posts = self.list().await?;
        Ok(posts.into_iter().filter(|p| p.published).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_slug() {
        assert_eq!(generate_slug("Hello, World!"), "hello-world");
        assert_eq!(generate_slug("  PapeX:  Receipts 2.0  "), "papex-receipts-2-0");
        assert_eq!(generate_slug("---"), "");
        assert_eq!(generate_slug("already-a-slug"), "already-a-slug");
    }

    #[test]
    fn test_url_classification() {
        assert!(is_inline_data("data:image/png;base64,AAAA"));
        assert!(!is_inline_data("https://papex.app/a.png"));
        assert!(is_hosted_url("http://papex.app/a.png"));
        assert!(is_hosted_url("https://papex.app/a.png"));
        assert!(!is_hosted_url("/public/a.png"));
    }
}
