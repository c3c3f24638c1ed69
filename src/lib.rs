pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::site::{SiteConfig, StorageProvider};

pub use adapters::{ImgBbHost, InlineDataHost, JsonFileStore, LocalObjectStore};
pub use crate::core::blog::BlogService;
pub use crate::core::value_prop::{
    calculate_pos_value_prop_model, PosValuePropInputs, PosValuePropOutputs,
};
pub use domain::model::{BlogPatch, BlogPost, ImageFile, ImageSource, NewBlogPost};
pub use domain::ports::{BlogStore, ImageHost};
pub use utils::error::{Result, SiteError};
