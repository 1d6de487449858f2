pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Post, PostAddress, PostBuilder};
pub use repository::PostRepository;
pub use value_objects::{PostFormat, PostId, PostSlug, PostStatus, PostTitle};
