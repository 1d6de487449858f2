use crate::domain::errors::DomainResult;
use crate::domain::link::Link;
use async_trait::async_trait;

#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Every link ordered by type, then sort column, then title.
    async fn list_ordered(&self) -> DomainResult<Vec<Link>>;
}
