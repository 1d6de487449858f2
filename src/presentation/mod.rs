pub mod http;
pub mod syndication;
