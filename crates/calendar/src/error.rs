//! Error types for the almanac-calendar crate.

/// Error type for the fallible edges of the almanac-calendar crate.
///
/// The calendar operations themselves are total and report absence with
/// sentinel values; only month construction from external input can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a month name cannot be recognised.
    #[error("unknown month name: {name:?}")]
    UnknownMonth {
        /// The unrecognised input.
        name: String,
    },
}
