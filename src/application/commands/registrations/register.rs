use super::{AlertCode, RegistrationCommandService, RegistrationInput, RegistrationOutcome};
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::verification::VerificationContext,
    },
    domain::{
        errors::DomainError,
        event::{Event, EventId},
        locale::Locale,
        registration::{
            NewRegistration, PersonName, Registration, RegistrationEmail,
            RegistrationRuleViolation,
        },
    },
};
use validator::Validate;

pub struct RegisterCommand {
    pub event_id: i64,
    pub input: RegistrationInput,
    pub verification: VerificationContext,
    pub locale: Locale,
}

impl RegistrationCommandService {
    /// Runs one registration attempt.
    ///
    /// Checks run in a fixed order (event lookup, human verification, input,
    /// business rules) and the first failure ends the attempt without any
    /// write. Only an unexpected store failure is returned as `Err`.
    pub async fn register(&self, command: RegisterCommand) -> ApplicationResult<RegistrationOutcome> {
        let RegisterCommand {
            event_id,
            input,
            verification,
            locale,
        } = command;

        let Some(event) = self.lookup_event(event_id).await? else {
            tracing::debug!(event_id, "registration for unknown event");
            return Ok(RegistrationOutcome::EventNotFound);
        };

        if !self.human_verifier.verify(&verification).await {
            tracing::debug!(event_id, "human verification failed");
            return Ok(rejected(event, input, AlertCode::InvalidRegistration));
        }

        let Some(new_registration) = self.parse_input(event.id(), &input) else {
            tracing::debug!(event_id, "registration input rejected");
            return Ok(rejected(event, input, AlertCode::InvalidRegistration));
        };

        if let Some(violation) = self.check_business_rules(&event, &new_registration).await? {
            tracing::info!(event_id, code = violation.code(), "registration refused");
            return Ok(rejected(event, input, violation.into()));
        }

        let registration = match self
            .registration_repo
            .insert(new_registration, event.registration_limit())
            .await
        {
            Ok(registration) => registration,
            Err(DomainError::Registration(violation)) => {
                tracing::info!(event_id, code = violation.code(), "registration refused by store");
                return Ok(rejected(event, input, violation.into()));
            }
            Err(err) => return Err(ApplicationError::infrastructure(err.to_string())),
        };

        self.notify(&registration, &event, &locale).await;
        tracing::info!(
            event_id,
            registration_id = i64::from(registration.id()),
            "registration stored"
        );

        Ok(RegistrationOutcome::Registered {
            event,
            registration,
        })
    }

    async fn lookup_event(&self, event_id: i64) -> ApplicationResult<Option<Event>> {
        let Ok(id) = EventId::new(event_id) else {
            return Ok(None);
        };
        Ok(self.event_repo.find_by_id(id).await?)
    }

    fn parse_input(&self, event_id: EventId, input: &RegistrationInput) -> Option<NewRegistration> {
        let input = input.normalized();
        if input.validate().is_err() {
            return None;
        }

        let email = RegistrationEmail::new(input.email).ok()?;
        let name = PersonName::new(input.name).ok()?;
        let first_name = PersonName::new(input.first_name).ok()?;

        Some(NewRegistration::new(
            event_id,
            email,
            name,
            first_name,
            self.clock.now(),
        ))
    }

    async fn check_business_rules(
        &self,
        event: &Event,
        registration: &NewRegistration,
    ) -> ApplicationResult<Option<RegistrationRuleViolation>> {
        if !event.is_open_for_registration(self.clock.now()) {
            return Ok(Some(RegistrationRuleViolation::RegistrationClosed));
        }

        if self
            .registration_repo
            .find_by_event_and_email(event.id(), registration.email())
            .await?
            .is_some()
        {
            return Ok(Some(RegistrationRuleViolation::AlreadyRegistered));
        }

        if let Some(limit) = event.registration_limit() {
            let count = self.registration_repo.count_by_event(event.id()).await?;
            if count >= u64::from(limit) {
                return Ok(Some(RegistrationRuleViolation::CapacityReached));
            }
        }

        Ok(None)
    }

    async fn notify(&self, registration: &Registration, event: &Event, locale: &Locale) {
        if let Err(err) = self
            .notifier
            .send_confirmation(registration, event, locale)
            .await
        {
            tracing::warn!(
                error = %err,
                registration_id = i64::from(registration.id()),
                "failed to dispatch registration confirmation"
            );
        }
    }
}

fn rejected(event: Event, input: RegistrationInput, alert: AlertCode) -> RegistrationOutcome {
    RegistrationOutcome::Rejected {
        event,
        input,
        alert,
    }
}
