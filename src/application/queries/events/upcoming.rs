use super::EventQueryService;
use crate::{application::error::ApplicationResult, domain::event::Event};

impl EventQueryService {
    /// Events that have not started yet, earliest first.
    pub async fn upcoming_events(&self) -> ApplicationResult<Vec<Event>> {
        let now = self.clock.now();
        let mut events = self.event_repo.find_upcoming(now).await?;
        events.sort_by_key(|event| event.held_on());
        Ok(events)
    }
}
