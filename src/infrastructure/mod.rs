pub mod database;
pub mod notification;
pub mod rendering;
pub mod repositories;
pub mod time;
pub mod verification;
