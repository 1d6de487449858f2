use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::event::EventRepository};

pub struct EventQueryService {
    pub(super) event_repo: Arc<dyn EventRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl EventQueryService {
    pub fn new(event_repo: Arc<dyn EventRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { event_repo, clock }
    }
}
