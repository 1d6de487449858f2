use super::PostQueryService;
use crate::{
    application::{
        dto::{PostDto, PostSummaryDto, PostViewDto},
        error::ApplicationResult,
    },
    domain::post::PostAddress,
};

/// Raw path segments of a post URL.
pub struct GetPostByAddressQuery {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub slug: String,
}

impl PostQueryService {
    /// Resolves a post with its neighbours. Addresses naming a date that does
    /// not exist are answered with `None` without touching the store.
    pub async fn get_post(&self, query: GetPostByAddressQuery) -> ApplicationResult<Option<PostViewDto>> {
        let Some(address) = PostAddress::from_parts(query.year, query.month, query.day, &query.slug)
        else {
            tracing::debug!(
                year = query.year,
                month = query.month,
                day = query.day,
                "post address does not name a valid date"
            );
            return Ok(None);
        };

        let Some(post) = self.post_repo.find_published_by_address(&address).await? else {
            return Ok(None);
        };

        let previous = self.post_repo.find_previous(&post).await?;
        let next = self.post_repo.find_next(&post).await?;
        let content = self.body_renderer.render(&post);

        Ok(Some(PostViewDto {
            post: PostDto::from_post(&post, content),
            previous_post: previous.as_ref().map(PostSummaryDto::from),
            next_post: next.as_ref().map(PostSummaryDto::from),
        }))
    }
}
