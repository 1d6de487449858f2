pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::Link;
pub use repository::LinkRepository;
pub use value_objects::{LinkId, LinkTitle, LinkType};
