//! TOML event file reader and calendar loader.

use std::path::Path;

use almanac_calendar::{Event, EventCalendar};
use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::IoError;
use crate::validate::ValidationCollector;

/// Accepted layouts for the `start` field.
const START_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Top-level shape of an event file: a list of `[[event]]` tables.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EventFile {
    #[serde(default, rename = "event")]
    events: Vec<EventRecord>,
}

/// One `[[event]]` table before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EventRecord {
    name: String,
    start: String,
    #[serde(default)]
    duration: u32,
}

fn parse_start(s: &str) -> Option<NaiveDateTime> {
    START_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s.trim(), fmt).ok())
}

/// Parses and validates events from TOML text.
///
/// `origin` is only used to label errors.
fn parse_with_origin(text: &str, origin: &Path) -> Result<Vec<Event>, IoError> {
    let file: EventFile = toml::from_str(text).map_err(|e| IoError::Parse {
        path: origin.to_path_buf(),
        reason: e.message().to_string(),
    })?;

    let mut collector = ValidationCollector::new();
    let mut events = Vec::with_capacity(file.events.len());
    for (i, record) in file.events.into_iter().enumerate() {
        if record.name.trim().is_empty() {
            collector.push(format!("event {i}: empty name"));
        }
        match parse_start(&record.start) {
            Some(start) => events.push(Event::new(record.name, start, record.duration)),
            None => collector.push(format!(
                "event {i}: unrecognised start {:?} (expected YYYY-MM-DDTHH:MM[:SS])",
                record.start
            )),
        }
    }
    collector.finish()?;
    Ok(events)
}

/// Parses events from TOML text held in memory.
///
/// # Errors
///
/// Returns [`IoError::Parse`] for malformed TOML and [`IoError::Validation`]
/// listing every record with an empty name or an unparsable start.
pub fn parse_events(text: &str) -> Result<Vec<Event>, IoError> {
    parse_with_origin(text, Path::new("<inline>"))
}

/// Reads events from a TOML file of `[[event]]` tables, in file order.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::Io`] if it cannot be read, and the errors of
/// [`parse_events`] for bad content.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_events(path: &Path) -> Result<Vec<Event>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let events = parse_with_origin(&text, path)?;
    debug!(n_events = events.len(), "event file parsed");
    Ok(events)
}

/// Adds every event to `calendar` in the given order.
pub fn populate(calendar: &mut EventCalendar, events: impl IntoIterator<Item = Event>) {
    for event in events {
        calendar.add_event(event);
    }
}

/// Reads an event file and builds a calendar from it.
///
/// # Errors
///
/// Propagates the errors of [`read_events`].
pub fn load_calendar(path: &Path) -> Result<EventCalendar, IoError> {
    let events = read_events(path)?;
    let mut calendar = EventCalendar::new();
    populate(&mut calendar, events);
    info!(
        n_events = calendar.len(),
        n_months = calendar.months().count(),
        "calendar loaded"
    );
    Ok(calendar)
}
