mod get_by_id;
mod service;
mod upcoming;

pub use get_by_id::GetEventByIdQuery;
pub use service::EventQueryService;
