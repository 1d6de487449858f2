mod get_by_address;
mod list;
mod service;

pub use get_by_address::GetPostByAddressQuery;
pub use list::ListPublishedPostsQuery;
pub use service::PostQueryService;
