// tests/registration_workflow.rs
use community_site::application::{
    commands::registrations::{AlertCode, RegisterCommand, RegistrationInput, RegistrationOutcome},
    error::ApplicationError,
    ports::verification::VerificationContext,
};
use community_site::domain::{
    event::{Event, EventId},
    locale::Locale,
    registration::RegistrationRuleViolation,
};
use pretty_assertions::assert_eq;

mod support;
use support::{
    InMemoryEventRepo, InMemoryPostRepo, InsertBehavior, RecordingNotifier,
    RecordingRegistrationRepo, StaticVerifier, TestContext, registration_for, summer_event,
    winter_event,
};

fn context() -> TestContext {
    TestContext::new(
        InMemoryEventRepo::with(vec![summer_event(), winter_event()]),
        InMemoryPostRepo::default(),
    )
}

fn command(event_id: i64, input: RegistrationInput) -> RegisterCommand {
    RegisterCommand {
        event_id,
        input,
        verification: VerificationContext {
            response_token: Some("token".into()),
            remote_addr: Some("203.0.113.7".into()),
        },
        locale: Locale::new("de-DE").unwrap(),
    }
}

fn valid_input() -> RegistrationInput {
    RegistrationInput::new("michael@euregjug.eu", "Simons", "Michael")
}

async fn register(ctx: &TestContext, cmd: RegisterCommand) -> RegistrationOutcome {
    ctx.services()
        .registration_commands
        .register(cmd)
        .await
        .expect("workflow returned an error")
}

fn assert_rejected(outcome: &RegistrationOutcome, expected: AlertCode) {
    match outcome {
        RegistrationOutcome::Rejected { alert, .. } => assert_eq!(*alert, expected),
        other => panic!("expected rejection with {expected}, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_event_never_touches_store_or_notifier() {
    let ctx = context();

    for id in [4711, 0, -1] {
        let outcome = register(&ctx, command(id, valid_input())).await;
        assert_eq!(outcome, RegistrationOutcome::EventNotFound);
        assert_eq!(outcome.alert(), None);
    }

    assert_eq!(ctx.verifier.calls(), 0);
    assert_eq!(ctx.registrations.calls(), 0);
    assert!(ctx.notifier.sent().is_empty());
}

#[tokio::test]
async fn failed_human_verification_is_an_invalid_registration() {
    let ctx = context().with_verifier(StaticVerifier::failing());

    let outcome = register(&ctx, command(23, valid_input())).await;

    assert_rejected(&outcome, AlertCode::InvalidRegistration);
    assert_eq!(outcome.alert().map(|a| a.as_str()), Some("invalidRegistration"));
    assert_eq!(ctx.registrations.calls(), 0);
    assert!(ctx.notifier.sent().is_empty());
}

#[tokio::test]
async fn verifier_sees_the_request_context() {
    let ctx = context();
    register(&ctx, command(23, valid_input())).await;

    let seen = ctx.verifier.seen.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![VerificationContext {
            response_token: Some("token".into()),
            remote_addr: Some("203.0.113.7".into()),
        }]
    );
}

#[tokio::test]
async fn malformed_input_is_rejected_with_the_submitted_values() {
    let ctx = context();
    let inputs = [
        RegistrationInput::new("not-an-email", "Simons", "Michael"),
        RegistrationInput::new("michael@euregjug.eu", "  ", "Michael"),
        RegistrationInput::new("michael@euregjug.eu", "Simons", ""),
        RegistrationInput::new("michael@euregjug.eu", "x".repeat(513), "Michael"),
    ];

    for input in inputs {
        let outcome = register(&ctx, command(23, input.clone())).await;
        match outcome {
            RegistrationOutcome::Rejected {
                event,
                input: echoed,
                alert,
            } => {
                assert_eq!(alert, AlertCode::InvalidRegistration);
                assert_eq!(echoed, input);
                assert_eq!(event.id(), EventId::new(23).unwrap());
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    assert_eq!(ctx.registrations.calls(), 0);
    assert!(ctx.notifier.sent().is_empty());
}

#[tokio::test]
async fn started_events_are_closed_for_registration() {
    let past = Event::builder(
        EventId::new(5).unwrap(),
        chrono::DateTime::parse_from_rfc3339("2016-06-01T19:00:00+02:00").unwrap(),
        "old",
        "gone",
    )
    .build()
    .unwrap();
    let ctx = TestContext::new(InMemoryEventRepo::with(vec![past]), InMemoryPostRepo::default());

    let outcome = register(&ctx, command(5, valid_input())).await;

    assert_rejected(
        &outcome,
        AlertCode::Violation(RegistrationRuleViolation::RegistrationClosed),
    );
    assert_eq!(outcome.alert().map(|a| a.as_str()), Some("registrationClosed"));
    assert_eq!(ctx.registrations.inserts(), 0);
}

#[tokio::test]
async fn duplicate_email_is_already_registered() {
    let existing = registration_for(&summer_event(), 1, "michael@euregjug.eu");
    let ctx = context().with_registrations(RecordingRegistrationRepo::with_existing(vec![existing]));

    // Same address, different case and padding.
    let input = RegistrationInput::new("  Michael@EuregJUG.eu ", "Simons", "Michael");
    let outcome = register(&ctx, command(23, input)).await;

    assert_rejected(
        &outcome,
        AlertCode::Violation(RegistrationRuleViolation::AlreadyRegistered),
    );
    assert_eq!(outcome.alert().map(|a| a.as_str()), Some("alreadyRegistered"));
    assert_eq!(ctx.registrations.inserts(), 0);
    assert!(ctx.notifier.sent().is_empty());
}

#[tokio::test]
async fn full_events_reject_further_registrations() {
    let start = chrono::DateTime::parse_from_rfc3339("2016-07-07T19:00:00+02:00").unwrap();
    let limited = Event::builder(EventId::new(7).unwrap(), start, "small room", "two seats")
        .registration_limit(2)
        .build()
        .unwrap();
    let ctx = TestContext::new(
        InMemoryEventRepo::with(vec![limited.clone()]),
        InMemoryPostRepo::default(),
    )
    .with_registrations(RecordingRegistrationRepo::with_existing(vec![
        registration_for(&limited, 1, "a@euregjug.eu"),
        registration_for(&limited, 2, "b@euregjug.eu"),
    ]));

    let outcome = register(&ctx, command(7, valid_input())).await;

    assert_rejected(
        &outcome,
        AlertCode::Violation(RegistrationRuleViolation::CapacityReached),
    );
    assert_eq!(
        outcome.alert().map(|a| a.as_str()),
        Some("maxNumberOfRegistrationsReached")
    );
    assert_eq!(ctx.registrations.inserts(), 0);
}

#[tokio::test]
async fn violations_reported_by_the_store_keep_their_codes() {
    for violation in [
        RegistrationRuleViolation::AlreadyRegistered,
        RegistrationRuleViolation::CapacityReached,
    ] {
        let ctx = context().with_registrations(RecordingRegistrationRepo::with_behavior(
            InsertBehavior::Violate(violation),
        ));

        let outcome = register(&ctx, command(23, valid_input())).await;

        assert_rejected(&outcome, AlertCode::Violation(violation));
        assert_eq!(ctx.registrations.inserts(), 1);
        assert!(ctx.notifier.sent().is_empty());
    }
}

#[tokio::test]
async fn store_failure_is_an_error_and_never_notifies() {
    let ctx = context().with_registrations(RecordingRegistrationRepo::with_behavior(
        InsertBehavior::Fail,
    ));

    let result = ctx
        .services()
        .registration_commands
        .register(command(23, valid_input()))
        .await;

    assert!(matches!(result, Err(ApplicationError::Infrastructure(_))));
    assert!(ctx.notifier.sent().is_empty());
}

#[tokio::test]
async fn valid_registration_writes_once_and_notifies_once() {
    let ctx = context();

    let outcome = register(&ctx, command(23, valid_input())).await;

    let RegistrationOutcome::Registered {
        event,
        registration,
    } = &outcome
    else {
        panic!("expected success, got {outcome:?}");
    };
    assert_eq!(outcome.alert().map(|a| a.as_str()), Some("registered"));
    assert_eq!(event.id(), EventId::new(23).unwrap());
    assert_eq!(registration.email().as_str(), "michael@euregjug.eu");
    assert_eq!(registration.first_name().as_str(), "Michael");
    assert!(!registration.is_confirmed());
    assert_eq!(registration.created_at(), support::fixed_now());

    assert_eq!(ctx.registrations.inserts(), 1);
    assert_eq!(ctx.registrations.stored().len(), 1);

    let sent = ctx.notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].registration, *registration);
    assert_eq!(sent[0].event_title, "name-1");
    assert_eq!(sent[0].locale.as_str(), "de-DE");
}

#[tokio::test]
async fn notifier_failure_does_not_change_the_outcome() {
    let ctx = context().with_notifier(RecordingNotifier::failing());

    let outcome = register(&ctx, command(42, valid_input())).await;

    assert!(matches!(outcome, RegistrationOutcome::Registered { .. }));
    assert_eq!(ctx.registrations.inserts(), 1);
    assert_eq!(ctx.notifier.sent().len(), 1);
}

#[tokio::test]
async fn input_is_trimmed_before_storing() {
    let ctx = context();
    let input = RegistrationInput::new(" foo@bar.com ", " Bar ", " Foo ");

    let outcome = register(&ctx, command(42, input)).await;

    let RegistrationOutcome::Registered { registration, .. } = outcome else {
        panic!("expected success");
    };
    assert_eq!(registration.email().as_str(), "foo@bar.com");
    assert_eq!(registration.name().as_str(), "Bar");
    assert_eq!(registration.first_name().as_str(), "Foo");
}

#[tokio::test]
async fn email_is_stored_as_submitted() {
    let ctx = context();
    let input = RegistrationInput::new("Michael.Simons@EuregJUG.eu", "Simons", "Michael");

    let outcome = register(&ctx, command(42, input)).await;

    let RegistrationOutcome::Registered { registration, .. } = outcome else {
        panic!("expected success");
    };
    assert_eq!(registration.email().as_str(), "Michael.Simons@EuregJUG.eu");
    assert_eq!(ctx.notifier.sent()[0].registration.email().as_str(), "Michael.Simons@EuregJUG.eu");

    // A second attempt in lower case is the same registrant.
    let again = RegistrationInput::new("michael.simons@euregjug.eu", "Simons", "Michael");
    let outcome = register(&ctx, command(42, again)).await;
    assert_rejected(
        &outcome,
        AlertCode::Violation(RegistrationRuleViolation::AlreadyRegistered),
    );
    assert_eq!(ctx.registrations.inserts(), 1);
}
