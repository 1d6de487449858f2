// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_event;
mod postgres_link;
mod postgres_post;
mod postgres_registration;

pub use error::map_sqlx;
pub use postgres_event::PostgresEventRepository;
pub use postgres_link::PostgresLinkRepository;
pub use postgres_post::PostgresPostRepository;
pub use postgres_registration::PostgresRegistrationRepository;
