pub mod events;
pub mod links;
pub mod pagination;
pub mod posts;
pub mod registrations;

pub use events::EventDto;
pub use links::LinkDto;
pub use pagination::{Page, PageRequest};
pub use posts::{PostDto, PostSummaryDto, PostViewDto};
pub use registrations::RegistrationDto;
