pub mod entity;
pub mod repository;
pub mod rules;
pub mod value_objects;

pub use entity::{NewRegistration, Registration};
pub use repository::RegistrationRepository;
pub use rules::RegistrationRuleViolation;
pub use value_objects::{PersonName, RegistrationEmail, RegistrationId};
