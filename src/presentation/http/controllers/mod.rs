// src/presentation/http/controllers/mod.rs
pub mod feeds;
pub mod posts;
pub mod registrations;
pub mod site;
