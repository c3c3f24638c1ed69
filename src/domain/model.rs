use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An image file handed to an `ImageHost` for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Image input for a blog post: either an already-hosted URL or a file
/// that still needs uploading.
#[derive(Debug, Clone)]
pub enum ImageSource {
    Url(String),
    File(ImageFile),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub slug: String,
    pub read_time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub published: bool,
    /// Whether `image` points at a hosted http(s) URL rather than inline data.
    pub image_migrated: bool,
}

#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: Option<ImageSource>,
    pub read_time: String,
    pub published: bool,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<ImageSource>,
    pub read_time: Option<String>,
    pub published: Option<bool>,
}
