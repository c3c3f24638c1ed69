use chrono::{TimeZone, Utc};
use papex_site::adapters::{InlineDataHost, JsonFileStore, LocalObjectStore};
use papex_site::{
    BlogPatch, BlogPost, BlogService, BlogStore, ImageFile, ImageHost, ImageSource, NewBlogPost,
};
use tempfile::TempDir;

const DEFAULT_IMAGE_URL: &str = "https://papex.app/blog/blog_image.png";

fn new_post(title: &str, image: Option<ImageSource>) -> NewBlogPost {
    NewBlogPost {
        title: title.to_string(),
        excerpt: "An excerpt".to_string(),
        content: "Body text".to_string(),
        image,
        read_time: "5 min read".to_string(),
        published: false,
    }
}

fn sample_image() -> ImageFile {
    ImageFile {
        filename: "cover.png".to_string(),
        content_type: "image/png".to_string(),
        bytes: vec![1, 2, 3, 4],
    }
}

fn service_in(dir: &TempDir) -> BlogService<JsonFileStore, InlineDataHost> {
    BlogService::new(
        JsonFileStore::new(dir.path().to_path_buf()),
        InlineDataHost::new(),
    )
}

#[tokio::test]
async fn test_create_without_image_uses_default_url() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);

    let id = service.create(new_post("Hello World", None)).await.unwrap();
    let post = service.get(&id).await.unwrap().unwrap();

    assert_eq!(post.title, "Hello World");
    assert_eq!(post.slug, "hello-world");
    assert_eq!(post.image, DEFAULT_IMAGE_URL);
    assert!(post.image_migrated);
    assert!(!post.published);
    assert!(post.updated_at.is_none());
}

#[tokio::test]
async fn test_create_with_hosted_url_keeps_it() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);

    let id = service
        .create(new_post(
            "Hosted",
            Some(ImageSource::Url("https://cdn.example.com/a.png".to_string())),
        ))
        .await
        .unwrap();
    let post = service.get(&id).await.unwrap().unwrap();

    assert_eq!(post.image, "https://cdn.example.com/a.png");
    assert!(post.image_migrated);
}

#[tokio::test]
async fn test_create_rejects_raw_data_url_and_local_path() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);

    for bad in ["data:image/png;base64,AAAA", "/tmp/local.png", "images/a.png"] {
        let id = service
            .create(new_post("Rejected", Some(ImageSource::Url(bad.to_string()))))
            .await
            .unwrap();
        let post = service.get(&id).await.unwrap().unwrap();
        assert_eq!(post.image, DEFAULT_IMAGE_URL, "input {:?}", bad);
    }
}

#[tokio::test]
async fn test_create_with_file_through_inline_host() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);

    let id = service
        .create(new_post("Inline", Some(ImageSource::File(sample_image()))))
        .await
        .unwrap();
    let post = service.get(&id).await.unwrap().unwrap();

    assert!(post.image.starts_with("data:image/png;base64,"));
    // Data URLs are not hosted; migration flag stays false.
    assert!(!post.image_migrated);
}

#[tokio::test]
async fn test_create_with_file_through_local_object_store() {
    let content_dir = TempDir::new().unwrap();
    let object_dir = TempDir::new().unwrap();
    let service = BlogService::new(
        JsonFileStore::new(content_dir.path().to_path_buf()),
        LocalObjectStore::new(object_dir.path().to_path_buf(), "https://papex.app/media"),
    );

    let id = service
        .create(new_post("Stored", Some(ImageSource::File(sample_image()))))
        .await
        .unwrap();
    let post = service.get(&id).await.unwrap().unwrap();

    assert!(post.image.starts_with("https://papex.app/media/"));
    assert!(post.image.ends_with("cover.png"));
    assert!(post.image_migrated);

    // The bytes actually landed on disk.
    let stored: Vec<_> = std::fs::read_dir(object_dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(stored.len(), 1);
    assert_eq!(std::fs::read(&stored[0]).unwrap(), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_update_title_reslugs_and_stamps_updated_at() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);

    let id = service.create(new_post("First Title", None)).await.unwrap();
    service
        .update(
            &id,
            BlogPatch {
                title: Some("Second Title!".to_string()),
                ..BlogPatch::default()
            },
        )
        .await
        .unwrap();

    let post = service.get(&id).await.unwrap().unwrap();
    assert_eq!(post.title, "Second Title!");
    assert_eq!(post.slug, "second-title");
    assert!(post.updated_at.is_some());
    // Untouched fields survive the patch.
    assert_eq!(post.excerpt, "An excerpt");
}

#[tokio::test]
async fn test_update_missing_post_errors() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);

    let result = service
        .update(
            "no-such-post",
            BlogPatch {
                published: Some(true),
                ..BlogPatch::default()
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(papex_site::SiteError::BlogNotFound { .. })
    ));
}

#[tokio::test]
async fn test_publish_flow_and_published_listing() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);

    let draft_id = service.create(new_post("Draft Post", None)).await.unwrap();
    let mut live = new_post("Live Post", None);
    live.published = true;
    service.create(live).await.unwrap();

    assert_eq!(service.list().await.unwrap().len(), 2);
    let published = service.list_published().await.unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].title, "Live Post");

    service
        .update(
            &draft_id,
            BlogPatch {
                published: Some(true),
                ..BlogPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(service.list_published().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_store_lists_newest_first() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().to_path_buf());

    for (id, day, title) in [
        ("a", 10, "Oldest"),
        ("c", 20, "Newest"),
        ("b", 15, "Middle"),
    ] {
        let post = BlogPost {
            id: id.to_string(),
            title: title.to_string(),
            excerpt: String::new(),
            content: String::new(),
            image: DEFAULT_IMAGE_URL.to_string(),
            slug: title.to_lowercase(),
            read_time: "1 min read".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 6, day, 12, 0, 0).unwrap(),
            updated_at: None,
            published: true,
            image_migrated: true,
        };
        store.insert(&post).await.unwrap();
    }

    let titles: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
}

#[tokio::test]
async fn test_oversized_inline_image_fails_create() {
    let dir = TempDir::new().unwrap();
    let service = BlogService::new(
        JsonFileStore::new(dir.path().to_path_buf()),
        InlineDataHost::with_max_encoded_bytes(4),
    );

    let result = service
        .create(new_post("Too Big", Some(ImageSource::File(sample_image()))))
        .await;
    assert!(matches!(
        result,
        Err(papex_site::SiteError::UploadError { .. })
    ));
    // Nothing was persisted.
    assert!(service.list().await.unwrap().is_empty());
}

struct FailingHost;

#[async_trait::async_trait]
impl ImageHost for FailingHost {
    async fn upload(&self, _image: &ImageFile) -> papex_site::Result<String> {
        Err(papex_site::SiteError::UploadError {
            message: "backend down".to_string(),
        })
    }
}

#[tokio::test]
async fn test_upload_failure_surfaces_as_error() {
    let dir = TempDir::new().unwrap();
    let service = BlogService::new(JsonFileStore::new(dir.path().to_path_buf()), FailingHost);

    let result = service
        .create(new_post("Broken", Some(ImageSource::File(sample_image()))))
        .await;
    assert!(result.is_err());
}
