use crate::domain::errors::DomainResult;
use crate::domain::post::{Post, PostAddress};
use async_trait::async_trait;

/// Read access to posts. Every method only ever returns published posts.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// One page ordered by publication date, then creation time, both
    /// descending, together with the total number of published posts.
    async fn find_published_page(&self, offset: u64, limit: u32) -> DomainResult<(Vec<Post>, u64)>;
    async fn find_published_by_address(&self, address: &PostAddress) -> DomainResult<Option<Post>>;
    /// The next older published post.
    async fn find_previous(&self, post: &Post) -> DomainResult<Option<Post>>;
    /// The next newer published post.
    async fn find_next(&self, post: &Post) -> DomainResult<Option<Post>>;
    async fn list_published(&self) -> DomainResult<Vec<Post>>;
}
