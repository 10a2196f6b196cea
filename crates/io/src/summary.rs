//! JSON summary of a calendar's aggregate queries.

use std::collections::BTreeMap;
use std::path::Path;

use almanac_calendar::{EventCalendar, Month};
use serde::Serialize;
use tracing::info;

use crate::error::IoError;

/// Aggregate view of a calendar, ready for serialisation.
///
/// Month maps are keyed by month name but ordered by month number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarSummary {
    /// Total number of events.
    pub total_events: usize,
    /// Event count of every month that holds events.
    pub months: Vec<MonthCount>,
    /// Counts for the explicitly queried months, including absent ones.
    pub queried: Vec<MonthCount>,
    /// Months that set a new record count in natural order.
    pub months_with_most_events: Vec<String>,
    /// Name of the longest event, empty when there is none.
    pub longest_event: String,
}

/// Event count for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthCount {
    pub month: String,
    pub events: usize,
}

impl MonthCount {
    fn new(month: Month, events: usize) -> Self {
        Self {
            month: month.name().to_string(),
            events,
        }
    }
}

impl CalendarSummary {
    /// Runs every aggregate query against `calendar`.
    ///
    /// Duplicate entries in `queried` are reported once, in natural order.
    pub fn from_calendar(calendar: &EventCalendar, queried: &[Month]) -> Self {
        let queried: BTreeMap<Month, usize> = queried
            .iter()
            .map(|&m| (m, calendar.total_events_in_month(m)))
            .collect();

        Self {
            total_events: calendar.len(),
            months: calendar
                .iter()
                .map(|(m, events)| MonthCount::new(m, events.len()))
                .collect(),
            queried: queried
                .into_iter()
                .map(|(m, n)| MonthCount::new(m, n))
                .collect(),
            months_with_most_events: calendar
                .months_with_most_events()
                .into_iter()
                .map(|m| m.name().to_string())
                .collect(),
            longest_event: calendar.longest_event().to_string(),
        }
    }

    /// Renders the summary as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Serialize`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, IoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Writes `summary` as JSON to `path`.
///
/// # Errors
///
/// Returns [`IoError::Serialize`] or [`IoError::Io`].
pub fn write_summary(path: &Path, summary: &CalendarSummary) -> Result<(), IoError> {
    let json = summary.to_json()?;
    std::fs::write(path, json).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "summary written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_calendar::Event;
    use chrono::NaiveDate;

    fn event(name: &str, month: u32, day: u32, duration: u32) -> Event {
        let start = NaiveDate::from_ymd_opt(2024, month, day)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Event::new(name, start, duration)
    }

    #[test]
    fn empty_calendar_summary() {
        let s = CalendarSummary::from_calendar(&EventCalendar::new(), &[Month::May]);
        assert_eq!(s.total_events, 0);
        assert!(s.months.is_empty());
        assert_eq!(s.queried, vec![MonthCount::new(Month::May, 0)]);
        assert!(s.months_with_most_events.is_empty());
        assert_eq!(s.longest_event, "");
    }

    #[test]
    fn summary_collects_every_query() {
        let cal: EventCalendar = [
            event("a", 1, 3, 30),
            event("b", 1, 4, 90),
            event("c", 3, 4, 60),
            event("d", 3, 5, 60),
            event("e", 3, 6, 90),
        ]
        .into_iter()
        .collect();

        let s = CalendarSummary::from_calendar(&cal, &[Month::March, Month::February, Month::March]);
        assert_eq!(s.total_events, 5);
        assert_eq!(
            s.months,
            vec![
                MonthCount::new(Month::January, 2),
                MonthCount::new(Month::March, 3)
            ]
        );
        assert_eq!(
            s.queried,
            vec![
                MonthCount::new(Month::February, 0),
                MonthCount::new(Month::March, 3)
            ]
        );
        assert_eq!(s.months_with_most_events, vec!["January", "March"]);
        assert_eq!(s.longest_event, "b");
    }

    #[test]
    fn json_field_names() {
        let cal: EventCalendar = [event("solo", 7, 1, 15)].into_iter().collect();
        let json = CalendarSummary::from_calendar(&cal, &[]).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_events"], 1);
        assert_eq!(value["months"][0]["month"], "July");
        assert_eq!(value["months"][0]["events"], 1);
        assert_eq!(value["months_with_most_events"][0], "July");
        assert_eq!(value["longest_event"], "solo");
    }
}
