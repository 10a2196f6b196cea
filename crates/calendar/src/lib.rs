//! # almanac-calendar
//!
//! In-memory calendar of non-overlapping, non-repeating events grouped by
//! month.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Event"] -->|".month()"| B["Month"]
//!     A -->|"add_event()"| C["EventCalendar"]
//!     C -->|"total_events_in_month()"| D["usize"]
//!     C -->|"months_with_most_events()"| E["BTreeSet of Month"]
//!     C -->|"longest_event()"| F["&str"]
//!     C -->|"cancel_events()"| D
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use almanac_calendar::{Event, EventCalendar, Month};
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 2, 10)
//!     .unwrap()
//!     .and_hms_opt(21, 0, 0)
//!     .unwrap();
//!
//! let mut calendar = EventCalendar::new();
//! calendar.add_event(Event::new("Concert", start, 120));
//!
//! assert_eq!(calendar.total_events_in_month(Month::February), 1);
//! assert_eq!(calendar.longest_event(), "Concert");
//!
//! // 2024-02-10 is a Saturday (day code 6)
//! assert_eq!(calendar.cancel_events(&[Month::February], 6), 1);
//! assert!(calendar.is_empty());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Month key with natural ordering and parsing |
//! | `event` | Immutable event record |
//! | `calendar` | Month-keyed ordered event container |
//! | `error` | Error types |

mod calendar;
mod error;
mod event;
mod month;

pub use calendar::EventCalendar;
pub use error::CalendarError;
pub use event::Event;
pub use month::Month;
