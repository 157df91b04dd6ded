//! Domain entities - the core business objects.

mod blog;

pub use blog::{Blog, BlogStatus, NewBlog, Visibility};
pub use scribe_shared::taxonomy::{Category, Tag, UnknownVariant};
