pub mod errors;
pub mod event;
pub mod link;
pub mod locale;
pub mod post;
pub mod registration;
