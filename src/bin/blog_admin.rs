use clap::{Parser, Subcommand};
use papex_site::adapters::{image_host_from_config, JsonFileStore};
use papex_site::utils::{logger, validation::Validate};
use papex_site::{BlogPatch, BlogService, ImageFile, ImageSource, NewBlogPost, SiteConfig};
use std::path::Path;

#[derive(Parser)]
#[command(name = "blog-admin")]
#[command(about = "Blog content management for the PapeX site")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "site-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new blog post
    Create {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        excerpt: String,

        /// Path to a file with the post body
        #[arg(long)]
        content_file: String,

        /// Image for the post: an http(s) URL or a local file to upload
        #[arg(long)]
        image: Option<String>,

        #[arg(long, default_value = "5 min read")]
        read_time: String,

        /// Publish immediately instead of keeping the post as a draft
        #[arg(long)]
        published: bool,
    },

    /// List posts, newest first
    List {
        /// Only show published posts
        #[arg(long)]
        published: bool,
    },

    /// Mark an existing post as published
    Publish {
        #[arg(long)]
        id: String,
    },
}

fn content_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "image/jpeg",
    }
}

fn image_source_from_arg(arg: &str) -> Result<ImageSource, std::io::Error> {
    if arg.starts_with("http://") || arg.starts_with("https://") {
        return Ok(ImageSource::Url(arg.to_string()));
    }

    let path = Path::new(arg);
    let bytes = std::fs::read(path)?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image")
        .to_string();
    Ok(ImageSource::File(ImageFile {
        content_type: content_type_for(path).to_string(),
        filename,
        bytes,
    }))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("📁 Loading configuration from: {}", args.config);
    let config = if Path::new(&args.config).exists() {
        match SiteConfig::from_file(&args.config) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        }
    } else {
        tracing::warn!("Config file not found, using defaults (inline image storage)");
        SiteConfig::default()
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        eprintln!("❌ Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    let store = JsonFileStore::new(config.blog.content_dir.clone());
    let host = image_host_from_config(&config.storage)?;
    let service = match &config.blog.default_image_url {
        Some(url) => BlogService::with_default_image(store, host, url.clone()),
        None => BlogService::new(store, host),
    };

    match args.command {
        Command::Create {
            title,
            excerpt,
            content_file,
            image,
            read_time,
            published,
        } => {
            let content = std::fs::read_to_string(&content_file)?;
            let image = match image.as_deref() {
                Some(arg) => Some(image_source_from_arg(arg)?),
                None => None,
            };

            let id = service
                .create(NewBlogPost {
                    title,
                    excerpt,
                    content,
                    image,
                    read_time,
                    published,
                })
                .await?;

            println!("✅ Blog post created: {}", id);
        }

        Command::List { published } => {
            let posts = if published {
                service.list_published().await?
            } else {
                service.list().await?
            };

            if posts.is_empty() {
                println!("No posts found");
            }
            for post in posts {
                let status = if post.published { "published" } else { "draft" };
                println!(
                    "{}  [{}]  {}  ({})",
                    post.created_at.format("%Y-%m-%d"),
                    status,
                    post.title,
                    post.id
                );
            }
        }

        Command::Publish { id } => {
            service
                .update(
                    &id,
                    BlogPatch {
                        published: Some(true),
                        ..BlogPatch::default()
                    },
                )
                .await?;
            println!("✅ Blog post published: {}", id);
        }
    }

    Ok(())
}
