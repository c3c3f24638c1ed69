pub mod blog;
pub mod fields;
pub mod value_prop;

pub use crate::domain::model::{BlogPatch, BlogPost, ImageFile, ImageSource, NewBlogPost};
pub use crate::domain::ports::{BlogStore, ImageHost};
pub use crate::utils::error::Result;
