// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::registrations::RegistrationCommandService,
        ports::{
            notification::ConfirmationNotifier, rendering::PostBodyRenderer, time::Clock,
            verification::HumanVerifier,
        },
        queries::{
            events::EventQueryService, links::LinkQueryService, posts::PostQueryService,
        },
    },
    domain::{
        event::EventRepository, link::LinkRepository, post::PostRepository,
        registration::RegistrationRepository,
    },
};

pub struct ApplicationServices {
    pub event_queries: Arc<EventQueryService>,
    pub post_queries: Arc<PostQueryService>,
    pub link_queries: Arc<LinkQueryService>,
    pub registration_commands: Arc<RegistrationCommandService>,
}

/// Collaborators the services are assembled from.
pub struct ServiceDependencies {
    pub event_repo: Arc<dyn EventRepository>,
    pub post_repo: Arc<dyn PostRepository>,
    pub link_repo: Arc<dyn LinkRepository>,
    pub registration_repo: Arc<dyn RegistrationRepository>,
    pub human_verifier: Arc<dyn HumanVerifier>,
    pub notifier: Arc<dyn ConfirmationNotifier>,
    pub body_renderer: Arc<dyn PostBodyRenderer>,
    pub clock: Arc<dyn Clock>,
    pub feed_page_size: u32,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let ServiceDependencies {
            event_repo,
            post_repo,
            link_repo,
            registration_repo,
            human_verifier,
            notifier,
            body_renderer,
            clock,
            feed_page_size,
        } = deps;

        let event_queries = Arc::new(EventQueryService::new(
            Arc::clone(&event_repo),
            Arc::clone(&clock),
        ));

        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&post_repo),
            Arc::clone(&body_renderer),
            feed_page_size,
        ));

        let link_queries = Arc::new(LinkQueryService::new(link_repo));

        let registration_commands = Arc::new(RegistrationCommandService::new(
            Arc::clone(&event_repo),
            Arc::clone(&registration_repo),
            Arc::clone(&human_verifier),
            Arc::clone(&notifier),
            Arc::clone(&clock),
        ));

        Self {
            event_queries,
            post_queries,
            link_queries,
            registration_commands,
        }
    }
}
