pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Event, EventBuilder};
pub use repository::EventRepository;
pub use value_objects::{EventDuration, EventId, EventTitle};
