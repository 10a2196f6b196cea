//! # almanac-io
//!
//! Loads events from TOML files into an [`EventCalendar`] and writes JSON
//! summaries of the calendar's aggregate queries.
//!
//! [`EventCalendar`]: almanac_calendar::EventCalendar

mod error;
mod reader;
mod summary;
mod validate;

pub use error::IoError;
pub use reader::{load_calendar, parse_events, populate, read_events};
pub use summary::{CalendarSummary, MonthCount, write_summary};
