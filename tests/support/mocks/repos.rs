// tests/support/mocks/repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use community_site::domain::{
    errors::{DomainError, DomainResult},
    event::{Event, EventId, EventRepository},
    link::{Link, LinkRepository},
    post::{Post, PostAddress, PostRepository},
    registration::{
        NewRegistration, Registration, RegistrationEmail, RegistrationId, RegistrationRepository,
        RegistrationRuleViolation,
    },
};
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

/* ------------------------------- events ------------------------------- */

#[derive(Debug, Default)]
pub struct InMemoryEventRepo {
    pub events: Vec<Event>,
    pub lookups: AtomicUsize,
}

impl InMemoryEventRepo {
    pub fn with(events: Vec<Event>) -> Self {
        Self {
            events,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepo {
    async fn find_by_id(&self, id: EventId) -> DomainResult<Option<Event>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.events.iter().find(|e| e.id() == id).cloned())
    }

    async fn find_upcoming(&self, now: DateTime<Utc>) -> DomainResult<Vec<Event>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .events
            .iter()
            .filter(|e| e.held_on() >= now)
            .cloned()
            .collect())
    }
}

/* ---------------------------- registrations ---------------------------- */

/// What `insert` does besides counting the call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InsertBehavior {
    #[default]
    Store,
    Violate(RegistrationRuleViolation),
    Fail,
}

/// Registration store that records every call. Reads are answered from
/// `existing`; inserts follow `behavior`.
#[derive(Debug, Default)]
pub struct RecordingRegistrationRepo {
    pub existing: Mutex<Vec<Registration>>,
    pub behavior: InsertBehavior,
    pub reads: AtomicUsize,
    pub inserts: AtomicUsize,
}

impl RecordingRegistrationRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_behavior(behavior: InsertBehavior) -> Self {
        Self {
            behavior,
            ..Self::default()
        }
    }

    pub fn with_existing(existing: Vec<Registration>) -> Self {
        Self {
            existing: Mutex::new(existing),
            ..Self::default()
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.reads() + self.inserts()
    }

    pub fn stored(&self) -> Vec<Registration> {
        self.existing.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegistrationRepository for RecordingRegistrationRepo {
    async fn find_by_event_and_email(
        &self,
        event_id: EventId,
        email: &RegistrationEmail,
    ) -> DomainResult<Option<Registration>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .existing
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.event_id() == event_id && r.email().matches(email))
            .cloned())
    }

    async fn count_by_event(&self, event_id: EventId) -> DomainResult<u64> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .existing
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.event_id() == event_id)
            .count() as u64)
    }

    async fn insert(
        &self,
        registration: NewRegistration,
        _limit: Option<u32>,
    ) -> DomainResult<Registration> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            InsertBehavior::Store => {
                let mut existing = self.existing.lock().unwrap();
                let id = RegistrationId::new(existing.len() as i64 + 1)?;
                let stored = registration.into_registration(id);
                existing.push(stored.clone());
                Ok(stored)
            }
            InsertBehavior::Violate(violation) => Err(violation.into()),
            InsertBehavior::Fail => Err(DomainError::Persistence("connection reset".into())),
        }
    }
}

/* -------------------------------- posts -------------------------------- */

/// Post store over a fixed list. Only published posts are ever returned.
#[derive(Debug, Default)]
pub struct InMemoryPostRepo {
    pub posts: Vec<Post>,
    pub calls: AtomicUsize,
}

impl InMemoryPostRepo {
    pub fn with(posts: Vec<Post>) -> Self {
        Self {
            posts,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Newest first.
    fn published(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self.posts.iter().filter(|p| p.is_published()).cloned().collect();
        posts.sort_by(|a, b| {
            b.published_on()
                .cmp(&a.published_on())
                .then(b.created_at().cmp(&a.created_at()))
        });
        posts
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepo {
    async fn find_published_page(&self, offset: u64, limit: u32) -> DomainResult<(Vec<Post>, u64)> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let published = self.published();
        let total = published.len() as u64;
        let page = published
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn find_published_by_address(&self, address: &PostAddress) -> DomainResult<Option<Post>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .published()
            .into_iter()
            .find(|p| &p.address() == address))
    }

    async fn find_previous(&self, post: &Post) -> DomainResult<Option<Post>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let published = self.published();
        let position = published.iter().position(|p| p.id() == post.id());
        Ok(position.and_then(|i| published.get(i + 1).cloned()))
    }

    async fn find_next(&self, post: &Post) -> DomainResult<Option<Post>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let published = self.published();
        let position = published.iter().position(|p| p.id() == post.id());
        Ok(position
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| published.get(i).cloned()))
    }

    async fn list_published(&self) -> DomainResult<Vec<Post>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.published())
    }
}

/* -------------------------------- links -------------------------------- */

/// Link store over a fixed list, sorted the way the database orders it.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepo {
    pub links: Vec<Link>,
}

impl InMemoryLinkRepo {
    pub fn with(links: Vec<Link>) -> Self {
        Self { links }
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepo {
    async fn list_ordered(&self) -> DomainResult<Vec<Link>> {
        let mut links = self.links.clone();
        links.sort_by(|a, b| {
            a.link_type()
                .cmp(&b.link_type())
                .then(a.sort_col().cmp(&b.sort_col()))
                .then_with(|| a.title().as_str().cmp(b.title().as_str()))
        });
        Ok(links)
    }
}
