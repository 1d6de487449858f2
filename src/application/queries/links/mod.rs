mod grouped;
mod service;

pub use grouped::GroupedLinks;
pub use service::LinkQueryService;
