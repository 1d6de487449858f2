use super::EventQueryService;
use crate::{
    application::error::ApplicationResult,
    domain::event::{Event, EventId},
};

pub struct GetEventByIdQuery {
    pub id: i64,
}

impl EventQueryService {
    /// `None` for unknown ids, including ones that can never exist.
    pub async fn get_event(&self, query: GetEventByIdQuery) -> ApplicationResult<Option<Event>> {
        let Ok(id) = EventId::new(query.id) else {
            return Ok(None);
        };
        Ok(self.event_repo.find_by_id(id).await?)
    }
}
