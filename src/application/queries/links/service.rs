use std::sync::Arc;

use crate::domain::link::LinkRepository;

pub struct LinkQueryService {
    pub(super) link_repo: Arc<dyn LinkRepository>,
}

impl LinkQueryService {
    pub fn new(link_repo: Arc<dyn LinkRepository>) -> Self {
        Self { link_repo }
    }
}
