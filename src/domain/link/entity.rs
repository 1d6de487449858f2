// src/domain/link/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::link::value_objects::{LinkId, LinkTitle, LinkType};
use url::Url;

/// An external link shown in the site's sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    id: LinkId,
    link_type: LinkType,
    sort_col: i32,
    title: LinkTitle,
    url: Url,
}

impl Link {
    /// A generic link at the default position. Only absolute http(s) targets
    /// are accepted.
    pub fn new(id: LinkId, url: &str, title: LinkTitle) -> DomainResult<Self> {
        let url = Url::parse(url.trim())
            .map_err(|err| DomainError::Validation(format!("link target '{url}': {err}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DomainError::Validation(format!(
                "link target must be http or https, got '{}'",
                url.scheme()
            )));
        }

        Ok(Self {
            id,
            link_type: LinkType::Generic,
            sort_col: 0,
            title,
            url,
        })
    }

    pub fn with_type(mut self, link_type: LinkType) -> Self {
        self.link_type = link_type;
        self
    }

    /// Position within its type; lower comes first, ties break on title.
    pub fn sorted_at(mut self, sort_col: i32) -> Self {
        self.sort_col = sort_col;
        self
    }

    pub fn id(&self) -> LinkId {
        self.id
    }

    pub fn link_type(&self) -> LinkType {
        self.link_type
    }

    pub fn sort_col(&self) -> i32 {
        self.sort_col
    }

    pub fn title(&self) -> &LinkTitle {
        &self.title
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}
