// src/application/commands/registrations/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{
        notification::ConfirmationNotifier, time::Clock, verification::HumanVerifier,
    },
    domain::{event::EventRepository, registration::RegistrationRepository},
};

pub struct RegistrationCommandService {
    pub(super) event_repo: Arc<dyn EventRepository>,
    pub(super) registration_repo: Arc<dyn RegistrationRepository>,
    pub(super) human_verifier: Arc<dyn HumanVerifier>,
    pub(super) notifier: Arc<dyn ConfirmationNotifier>,
    pub(super) clock: Arc<dyn Clock>,
}

impl RegistrationCommandService {
    pub fn new(
        event_repo: Arc<dyn EventRepository>,
        registration_repo: Arc<dyn RegistrationRepository>,
        human_verifier: Arc<dyn HumanVerifier>,
        notifier: Arc<dyn ConfirmationNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            event_repo,
            registration_repo,
            human_verifier,
            notifier,
            clock,
        }
    }
}
