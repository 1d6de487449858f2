use std::collections::BTreeMap;

use super::LinkQueryService;
use crate::{
    application::{dto::LinkDto, error::ApplicationResult},
    domain::link::LinkType,
};

/// Sidebar links keyed by type. Types without links are absent.
pub type GroupedLinks = BTreeMap<LinkType, Vec<LinkDto>>;

impl LinkQueryService {
    /// Every link grouped by type, each group keeping the store's order.
    pub async fn grouped_links(&self) -> ApplicationResult<GroupedLinks> {
        let links = self.link_repo.list_ordered().await?;

        let mut grouped = GroupedLinks::new();
        for link in &links {
            grouped
                .entry(link.link_type())
                .or_default()
                .push(LinkDto::from(link));
        }
        Ok(grouped)
    }
}
