//! Calendar event record.

use std::fmt;

use chrono::{Datelike, NaiveDateTime, NaiveTime};

use crate::month::Month;

/// A single non-repeating event.
///
/// The month, day of month and day of week are derived from the start
/// timestamp, so they can never disagree with it. Events are immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
    name: String,
    start: NaiveDateTime,
    duration: u32,
    month: Month,
}

impl Event {
    /// Creates a new event starting at `start` and lasting `duration` minutes.
    pub fn new(name: impl Into<String>, start: NaiveDateTime, duration: u32) -> Self {
        // month0() is always in 0..12
        let month = Month::ALL[start.month0() as usize];
        Self {
            name: name.into(),
            start,
            duration,
            month,
        }
    }

    /// Returns the event name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the start date and time.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the start time of day.
    pub fn start_time(&self) -> NaiveTime {
        self.start.time()
    }

    /// Returns the duration in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Returns the month the event starts in.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day_of_month(&self) -> u8 {
        self.start.day() as u8
    }

    /// Returns the day-of-week code (1 = Monday, 7 = Sunday).
    pub fn day_of_week(&self) -> u8 {
        self.start.weekday().number_from_monday() as u8
    }

    /// Returns `true` if this event starts strictly before `other`.
    pub fn occurs_before(&self, other: &Event) -> bool {
        self.start < other.start
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} {:02} {} {} | {} min",
            self.name,
            self.start.weekday(),
            self.day_of_month(),
            self.month,
            self.start.format("%H:%M"),
            self.duration
        )
    }
}
