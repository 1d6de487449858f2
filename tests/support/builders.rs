// tests/support/builders.rs
use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use community_site::domain::{
    event::{Event, EventDuration, EventId},
    link::{Link, LinkId, LinkTitle, LinkType},
    post::{Post, PostFormat, PostId, PostSlug, PostStatus, PostTitle},
    registration::{NewRegistration, PersonName, Registration, RegistrationEmail, RegistrationId},
};

/// Event 23 of the sample calendar: 2016-07-07 19:00 +02:00, one hour,
/// with speaker and a multi-line location.
pub fn summer_event() -> Event {
    let start = FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2016, 7, 7, 19, 0, 0)
        .unwrap();
    Event::builder(EventId::new(23).unwrap(), start, "name-1", "desc-1")
        .created_at(start.with_timezone(&Utc))
        .duration(EventDuration::from_minutes(60).unwrap())
        .speaker("Farin Urlaub")
        .location(" Am Strand\n4223 Schlaraffenland\n\nirgendwo")
        .build()
        .unwrap()
}

/// Event 42 of the sample calendar: 2016-11-22 18:00 +01:00, default
/// duration.
pub fn winter_event() -> Event {
    let start = FixedOffset::east_opt(3600)
        .unwrap()
        .with_ymd_and_hms(2016, 11, 22, 18, 0, 0)
        .unwrap();
    Event::builder(EventId::new(42).unwrap(), start, "name-2", "desc-2")
        .created_at(start.with_timezone(&Utc))
        .build()
        .unwrap()
}

pub struct PostFixture {
    id: i64,
    published_on: NaiveDate,
    slug: String,
    content: String,
    status: PostStatus,
    hour: u32,
}

impl PostFixture {
    pub fn new(id: i64, slug: &str) -> Self {
        Self {
            id,
            published_on: NaiveDate::from_ymd_opt(2016, 8, 4).unwrap(),
            slug: slug.into(),
            content: slug.into(),
            status: PostStatus::Published,
            hour: 0,
        }
    }

    pub fn on(mut self, year: i32, month: u32, day: u32) -> Self {
        self.published_on = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn draft(mut self) -> Self {
        self.status = PostStatus::Draft;
        self
    }

    /// Creation hour on the publication day; orders posts of the same day.
    pub fn created_hour(mut self, hour: u32) -> Self {
        self.hour = hour;
        self
    }

    pub fn build(self) -> Post {
        Post::builder(
            PostId::new(self.id).unwrap(),
            self.published_on,
            PostSlug::new(self.slug.clone()).unwrap(),
            PostTitle::new(self.slug).unwrap(),
        )
        .content(self.content)
        .format(PostFormat::Html)
        .status(self.status)
        .created_at(self.published_on.and_hms_opt(self.hour, 0, 0).unwrap().and_utc())
        .build()
    }
}

pub fn registration_for(event: &Event, id: i64, email: &str) -> Registration {
    NewRegistration::new(
        event.id(),
        RegistrationEmail::new(email).unwrap(),
        PersonName::new("Simons").unwrap(),
        PersonName::new("Michael").unwrap(),
        Utc.with_ymd_and_hms(2016, 6, 1, 0, 0, 0).unwrap(),
    )
    .into_registration(RegistrationId::new(id).unwrap())
}

pub fn link(id: i64, url: &str, title: &str) -> Link {
    Link::new(LinkId::new(id).unwrap(), url, LinkTitle::new(title).unwrap()).unwrap()
}

/// The one sidebar link of the sample site.
pub fn michael_simons_link() -> Link {
    link(1, "http://michael-simons.eu", "Michael Simons")
}

pub fn sponsor_link(id: i64, title: &str, sort_col: i32) -> Link {
    link(id, "https://sponsor.example.org", title)
        .with_type(LinkType::Sponsor)
        .sorted_at(sort_col)
}
