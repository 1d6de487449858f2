// tests/support/mocks/mod.rs
pub mod ports;
pub mod repos;
pub mod time;

pub use ports::*;
pub use repos::*;
pub use time::*;
