// src/presentation/syndication/calendar.rs
use super::{
    SyndicationDocument,
    datetime::{UTC_BASIC_FORMAT, format_utc},
};
use crate::domain::event::Event;

/// Line terminator of the calendar format, used for every line.
pub const ICS_LINE_BREAK: &str = "\r\n";

/// Deployment specific literals of the calendar export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSettings {
    pub product_id: String,
    /// Suffix of every event UID (`<id>@<uid_domain>`).
    pub uid_domain: String,
    pub organizer: String,
    /// Site root without trailing slash; registration links hang off it.
    pub site_url: String,
    pub timestamp_pattern: String,
}

impl CalendarSettings {
    fn registration_url(&self, event: &Event) -> String {
        format!("{}/register/{}", self.site_url, event.id())
    }
}

/// Renders events as one iCalendar document.
///
/// No line folding is performed, so long lines exceed the 75 octet limit of
/// RFC 5545.
#[derive(Debug, Clone)]
pub struct CalendarFeedRenderer {
    settings: CalendarSettings,
}

impl CalendarFeedRenderer {
    pub const CONTENT_TYPE: &'static str = "text/calendar";

    pub fn new(settings: CalendarSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CalendarSettings {
        &self.settings
    }

    /// `events` are emitted in the given order, expected ascending by start.
    pub fn render(&self, events: &[Event]) -> SyndicationDocument {
        let mut ics = IcsWriter::default();
        ics.line("BEGIN", "VCALENDAR");
        ics.line("VERSION", "2.0");
        ics.line("PRODID", &self.settings.product_id);
        for event in events {
            self.write_event(&mut ics, event);
        }
        ics.line("END", "VCALENDAR");

        SyndicationDocument {
            content_type: Self::CONTENT_TYPE,
            body: ics.finish(),
        }
    }

    fn write_event(&self, ics: &mut IcsWriter, event: &Event) {
        let summary = match event.speaker() {
            Some(speaker) => format!("{} ({speaker})", event.title()),
            None => event.title().to_string(),
        };

        ics.line("BEGIN", "VEVENT");
        ics.line("UID", &format!("{}@{}", event.id(), self.settings.uid_domain));
        ics.line("ORGANIZER", &self.settings.organizer);
        ics.line("DTSTAMP", &self.timestamp(&event.created_at()));
        ics.line("DTSTART", &self.timestamp(&event.held_on()));
        ics.line("DTEND", &self.timestamp(&event.ends_at()));
        ics.line("SUMMARY", &summary);
        ics.line("DESCRIPTION", event.description());
        ics.line("URL", &self.settings.registration_url(event));
        if let Some(location) = event.location().and_then(format_location) {
            ics.line("LOCATION", &location);
        }
        ics.line("END", "VEVENT");
    }

    fn timestamp<Tz: chrono::TimeZone>(&self, at: &chrono::DateTime<Tz>) -> String {
        format_utc(at, &self.settings.timestamp_pattern, UTC_BASIC_FORMAT)
    }
}

/// Collapses a multi-line address into one line.
///
/// Blank lines are dropped and the rest joined with `", "`. Lines are kept
/// verbatim, so leading whitespace of the first one survives. `None` when
/// nothing is left.
pub fn format_location(raw: &str) -> Option<String> {
    let lines: Vec<&str> = raw.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join(", "))
    }
}

#[derive(Default)]
struct IcsWriter {
    buf: String,
}

impl IcsWriter {
    fn line(&mut self, name: &str, value: &str) {
        self.buf.push_str(name);
        self.buf.push(':');
        self.buf.push_str(value);
        self.buf.push_str(ICS_LINE_BREAK);
    }

    fn finish(self) -> String {
        self.buf
    }
}
