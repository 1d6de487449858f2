use std::sync::Arc;

use crate::{application::ports::rendering::PostBodyRenderer, domain::post::PostRepository};

pub struct PostQueryService {
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) body_renderer: Arc<dyn PostBodyRenderer>,
    pub(super) page_size: u32,
}

impl PostQueryService {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        body_renderer: Arc<dyn PostBodyRenderer>,
        page_size: u32,
    ) -> Self {
        Self {
            post_repo,
            body_renderer,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn body_renderer(&self) -> Arc<dyn PostBodyRenderer> {
        Arc::clone(&self.body_renderer)
    }
}
