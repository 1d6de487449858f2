// src/presentation/syndication/news_feed.rs
use std::sync::Arc;

use super::{
    SyndicationDocument,
    datetime::{RFC822_GMT_FORMAT, format_utc, start_of_day_utc},
};
use crate::{
    application::{dto::Page, ports::rendering::PostBodyRenderer},
    domain::{locale::Locale, post::Post},
};

/// Channel literals of the RSS export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSettings {
    pub title: String,
    /// Site root without trailing slash; item and page links hang off it.
    pub link: String,
    pub description: String,
    pub generator: String,
    pub author: String,
    /// Path of the feed below `link`, e.g. `/feed.rss`.
    pub feed_path: String,
    pub date_pattern: String,
}

impl FeedSettings {
    pub fn page_url(&self, index: u32) -> String {
        format!("{}{}?page={index}", self.link, self.feed_path)
    }

    pub fn post_url(&self, post: &Post) -> String {
        format!("{}/{}", self.link, post.address().path())
    }
}

/// Renders one page of posts as an RSS 2.0 channel with atom navigation links.
pub struct NewsFeedRenderer {
    settings: FeedSettings,
    body_renderer: Arc<dyn PostBodyRenderer>,
}

impl NewsFeedRenderer {
    pub const CONTENT_TYPE: &'static str = "application/rss+xml";

    pub fn new(settings: FeedSettings, body_renderer: Arc<dyn PostBodyRenderer>) -> Self {
        Self {
            settings,
            body_renderer,
        }
    }

    pub fn settings(&self) -> &FeedSettings {
        &self.settings
    }

    /// The locale is accepted for symmetry with the HTML views; dates are
    /// always English and URLs never depend on it.
    pub fn render(&self, page: &Page<Post>, locale: &Locale) -> SyndicationDocument {
        tracing::debug!(
            page = page.index,
            items = page.items.len(),
            locale = %locale,
            "rendering news feed"
        );

        let mut xml = String::with_capacity(512 + page.items.len() * 1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(concat!(
            r#"<rss version="2.0" "#,
            r#"xmlns:content="http://purl.org/rss/1.0/modules/content/" "#,
            r#"xmlns:atom="http://www.w3.org/2005/Atom">"#
        ));
        xml.push_str("<channel>");

        element(&mut xml, "title", &self.settings.title);
        element(&mut xml, "link", &self.settings.link);
        element(&mut xml, "description", &self.settings.description);
        if let Some(first) = page.items.first() {
            let date = self.post_date(first);
            element(&mut xml, "pubDate", &date);
            element(&mut xml, "lastBuildDate", &date);
        }
        element(&mut xml, "generator", &self.settings.generator);

        if let Some(previous) = page.previous_index() {
            self.atom_link(&mut xml, "previous", previous);
        }
        self.atom_link(&mut xml, "self", page.index);
        if let Some(next) = page.next_index() {
            self.atom_link(&mut xml, "next", next);
        }

        for post in &page.items {
            self.write_item(&mut xml, post);
        }

        xml.push_str("</channel></rss>");

        SyndicationDocument {
            content_type: Self::CONTENT_TYPE,
            body: xml,
        }
    }

    fn write_item(&self, xml: &mut String, post: &Post) {
        let link = self.settings.post_url(post);

        xml.push_str("<item>");
        element(xml, "title", post.title().as_str());
        element(xml, "link", &link);
        element(xml, "content:encoded", &self.body_renderer.render(post));
        element(xml, "pubDate", &self.post_date(post));
        element(xml, "author", &self.settings.author);
        xml.push_str(&format!(
            r#"<guid isPermaLink="false">{}</guid>"#,
            escape_xml(&link)
        ));
        xml.push_str("</item>");
    }

    fn atom_link(&self, xml: &mut String, rel: &str, index: u32) {
        xml.push_str(&format!(
            r#"<atom:link rel="{rel}" href="{}" type="{}"/>"#,
            escape_xml(&self.settings.page_url(index)),
            Self::CONTENT_TYPE
        ));
    }

    fn post_date(&self, post: &Post) -> String {
        format_utc(
            &start_of_day_utc(post.published_on()),
            &self.settings.date_pattern,
            RFC822_GMT_FORMAT,
        )
    }
}

fn element(xml: &mut String, name: &str, text: &str) {
    xml.push_str(&format!("<{name}>{}</{name}>", escape_xml(text)));
}

/// Escapes the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
