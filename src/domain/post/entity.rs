// src/domain/post/entity.rs
use crate::domain::post::value_objects::{PostFormat, PostId, PostSlug, PostStatus, PostTitle};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

/// A news post. Its address (publication date plus slug) and id are fixed at
/// construction; build one with [`Post::builder`].
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    id: PostId,
    published_on: NaiveDate,
    slug: PostSlug,
    title: PostTitle,
    content: String,
    format: PostFormat,
    status: PostStatus,
    created_at: DateTime<Utc>,
}

impl Post {
    pub fn builder(id: PostId, published_on: NaiveDate, slug: PostSlug, title: PostTitle) -> PostBuilder {
        PostBuilder {
            id,
            published_on,
            slug,
            title,
            content: String::new(),
            format: PostFormat::Markdown,
            status: PostStatus::Draft,
            created_at: None,
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn published_on(&self) -> NaiveDate {
        self.published_on
    }

    pub fn slug(&self) -> &PostSlug {
        &self.slug
    }

    pub fn title(&self) -> &PostTitle {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn format(&self) -> PostFormat {
        self.format
    }

    pub fn status(&self) -> PostStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    pub fn address(&self) -> PostAddress {
        PostAddress {
            published_on: self.published_on,
            slug: self.slug.clone(),
        }
    }
}

pub struct PostBuilder {
    id: PostId,
    published_on: NaiveDate,
    slug: PostSlug,
    title: PostTitle,
    content: String,
    format: PostFormat,
    status: PostStatus,
    created_at: Option<DateTime<Utc>>,
}

impl PostBuilder {
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn format(mut self, format: PostFormat) -> Self {
        self.format = format;
        self
    }

    pub fn status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// `created_at` defaults to midnight UTC of the publication day.
    pub fn build(self) -> Post {
        let created_at = self
            .created_at
            .unwrap_or_else(|| self.published_on.and_time(NaiveTime::MIN).and_utc());

        Post {
            id: self.id,
            published_on: self.published_on,
            slug: self.slug,
            title: self.title,
            content: self.content,
            format: self.format,
            status: self.status,
            created_at,
        }
    }
}

/// External identity of a post: publication date plus slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostAddress {
    pub published_on: NaiveDate,
    pub slug: PostSlug,
}

impl PostAddress {
    /// Builds an address from raw path segments. Dates that do not exist in
    /// the calendar (e.g. February 30th) yield `None`.
    pub fn from_parts(year: i32, month: u32, day: u32, slug: &str) -> Option<Self> {
        let published_on = NaiveDate::from_ymd_opt(year, month, day)?;
        let slug = PostSlug::new(slug).ok()?;
        Some(Self { published_on, slug })
    }

    /// Path below the site root, numerals unpadded: `2016/8/4/slug`.
    pub fn path(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.published_on.year(),
            self.published_on.month(),
            self.published_on.day(),
            self.slug
        )
    }
}
