// src/infrastructure/notification/mail.rs
use crate::domain::{event::Event, locale::Locale, registration::Registration};
use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Composes the registration confirmation in the registrant's language.
/// German and English are supported; every other language gets English.
pub fn compose_confirmation(
    from: &str,
    registration: &Registration,
    event: &Event,
    locale: &Locale,
) -> OutgoingMail {
    let start = event.held_on();
    let (subject, body) = match locale.language() {
        "de" => (
            format!("Anmeldebestätigung: {}", event.title()),
            format!(
                "Hallo {} {},\n\nvielen Dank für Ihre Anmeldung zu \"{}\" am {}.\n{}\nBis bald!\n",
                registration.first_name(),
                registration.name(),
                event.title(),
                german_date(&start),
                location_line("Ort", event),
            ),
        ),
        _ => (
            format!("Registration confirmed: {}", event.title()),
            format!(
                "Hello {} {},\n\nthank you for registering for \"{}\" on {}.\n{}\nSee you soon!\n",
                registration.first_name(),
                registration.name(),
                event.title(),
                english_date(&start),
                location_line("Location", event),
            ),
        ),
    };

    OutgoingMail {
        from: from.to_string(),
        to: registration.email().to_string(),
        subject,
        body,
    }
}

fn german_date(at: &DateTime<FixedOffset>) -> String {
    at.format("%d.%m.%Y um %H:%M Uhr").to_string()
}

fn english_date(at: &DateTime<FixedOffset>) -> String {
    at.format("%B %-d, %Y at %H:%M").to_string()
}

fn location_line(label: &str, event: &Event) -> String {
    match event.location() {
        Some(location) => {
            let lines: Vec<&str> = location
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect();
            format!("{label}: {}\n", lines.join(", "))
        }
        None => String::new(),
    }
}
