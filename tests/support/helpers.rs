// tests/support/helpers.rs
use super::mocks::{
    FixedClock, InMemoryEventRepo, InMemoryLinkRepo, InMemoryPostRepo, ParagraphRenderer,
    RecordingNotifier, RecordingRegistrationRepo, StaticVerifier,
};
use axum::body::{self, Body};
use axum::response::Response;
use cookie::Key;
use community_site::application::services::{ApplicationServices, ServiceDependencies};
use community_site::domain::locale::Locale;
use community_site::presentation::http::{routes::build_router, state::HttpState};
use community_site::presentation::syndication::{
    CalendarFeedRenderer, CalendarSettings, FeedSettings, NewsFeedRenderer,
    datetime::{RFC822_GMT_FORMAT, UTC_BASIC_FORMAT},
};
use std::sync::Arc;

/// Every collaborator of the application, kept so tests can inspect them.
pub struct TestContext {
    pub events: Arc<InMemoryEventRepo>,
    pub posts: Arc<InMemoryPostRepo>,
    pub links: Arc<InMemoryLinkRepo>,
    pub registrations: Arc<RecordingRegistrationRepo>,
    pub verifier: Arc<StaticVerifier>,
    pub notifier: Arc<RecordingNotifier>,
    /// Signs flash cookies for every router built from this context.
    pub flash_key: Key,
}

impl TestContext {
    pub fn new(events: InMemoryEventRepo, posts: InMemoryPostRepo) -> Self {
        Self {
            events: Arc::new(events),
            posts: Arc::new(posts),
            links: Arc::new(InMemoryLinkRepo::default()),
            registrations: Arc::new(RecordingRegistrationRepo::new()),
            verifier: Arc::new(StaticVerifier::passing()),
            notifier: Arc::new(RecordingNotifier::new()),
            flash_key: Key::generate(),
        }
    }

    pub fn with_registrations(mut self, registrations: RecordingRegistrationRepo) -> Self {
        self.registrations = Arc::new(registrations);
        self
    }

    pub fn with_links(mut self, links: InMemoryLinkRepo) -> Self {
        self.links = Arc::new(links);
        self
    }

    pub fn with_verifier(mut self, verifier: StaticVerifier) -> Self {
        self.verifier = Arc::new(verifier);
        self
    }

    pub fn with_notifier(mut self, notifier: RecordingNotifier) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    pub fn services(&self) -> ApplicationServices {
        ApplicationServices::new(ServiceDependencies {
            event_repo: self.events.clone(),
            post_repo: self.posts.clone(),
            link_repo: self.links.clone(),
            registration_repo: self.registrations.clone(),
            human_verifier: self.verifier.clone(),
            notifier: self.notifier.clone(),
            body_renderer: Arc::new(ParagraphRenderer),
            clock: Arc::new(FixedClock),
            feed_page_size: 5,
        })
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::new(self.services()),
            calendar: Arc::new(CalendarFeedRenderer::new(calendar_settings())),
            news_feed: Arc::new(NewsFeedRenderer::new(
                feed_settings(),
                Arc::new(ParagraphRenderer),
            )),
            default_locale: Locale::new("en").unwrap(),
            flash_key: self.flash_key.clone(),
        };
        build_router(state)
    }
}

pub fn calendar_settings() -> CalendarSettings {
    CalendarSettings {
        product_id: "http://www.euregjug.eu/events".into(),
        uid_domain: "euregjug.eu".into(),
        organizer: "EuregJUG".into(),
        site_url: "http://euregjug.eu".into(),
        timestamp_pattern: UTC_BASIC_FORMAT.into(),
    }
}

pub fn feed_settings() -> FeedSettings {
    FeedSettings {
        title: "EuregJUG Maas-Rhine - All things JVM!".into(),
        link: "http://euregjug.eu".into(),
        description: "RSS Feed from EuregJUG, the Java User Group for the Euregio Maas-Rhine (Aachen, Maastricht, Liege).".into(),
        generator: "https://github.com/EuregJUG-Maas-Rhine/site".into(),
        author: "euregjug.eu".into(),
        feed_path: "/feed.rss".into(),
        date_pattern: RFC822_GMT_FORMAT.into(),
    }
}

pub async fn body_string(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body is not UTF-8")
}

pub async fn body_json(resp: Response) -> serde_json::Value {
    let text = body_string(resp).await;
    serde_json::from_str(&text).unwrap_or_else(|err| panic!("invalid JSON ({err}): {text}"))
}

pub fn empty() -> Body {
    Body::empty()
}
