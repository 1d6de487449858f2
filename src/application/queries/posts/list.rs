use super::PostQueryService;
use crate::{
    application::{
        dto::{Page, PageRequest, PostSummaryDto},
        error::ApplicationResult,
    },
    domain::post::Post,
};

pub struct ListPublishedPostsQuery {
    /// Zero-based page index.
    pub page: u32,
}

impl PostQueryService {
    /// One page of published posts, newest first, sized by configuration.
    pub async fn published_page(&self, query: ListPublishedPostsQuery) -> ApplicationResult<Page<Post>> {
        let request = PageRequest::new(query.page, self.page_size);
        let (posts, total) = self
            .post_repo
            .find_published_page(request.offset(), request.size)
            .await?;
        Ok(Page::new(posts, request, total))
    }

    pub async fn archive(&self) -> ApplicationResult<Vec<PostSummaryDto>> {
        let posts = self.post_repo.list_published().await?;
        Ok(posts.iter().map(PostSummaryDto::from).collect())
    }
}
