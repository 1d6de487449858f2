use crate::domain::link::{Link, LinkType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LinkDto {
    pub id: i64,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "generic")]
    pub link_type: LinkType,
    pub title: String,
    pub url: String,
}

impl From<&Link> for LinkDto {
    fn from(link: &Link) -> Self {
        Self {
            id: link.id().into(),
            link_type: link.link_type(),
            title: link.title().to_string(),
            url: link.url().to_string(),
        }
    }
}
