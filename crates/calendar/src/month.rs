//! Month-of-year key with natural calendar ordering.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// Month of the year.
///
/// The derived [`Ord`] follows declaration order, so January sorts first and
/// December last. This is the key order of [`EventCalendar`](crate::EventCalendar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// All twelve months in natural order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Creates a month from its number (1 = January, 12 = December).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn from_number(month: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(Self::ALL[(month - 1) as usize])
    }

    /// Returns the 1-based month number.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Returns the English month name.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses full names, three-letter abbreviations (both case-insensitive)
/// and month numbers.
impl FromStr for Month {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<u8>() {
            return Self::from_number(n);
        }
        let lower = trimmed.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| {
                let name = m.name().to_lowercase();
                name == lower || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| CalendarError::UnknownMonth {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_order() {
        assert!(Month::January < Month::February);
        assert!(Month::November < Month::December);
        let mut shuffled = vec![Month::May, Month::January, Month::December, Month::March];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Month::January, Month::March, Month::May, Month::December]
        );
    }

    #[test]
    fn all_is_sorted() {
        assert!(Month::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn from_number_valid() {
        for (i, m) in Month::ALL.iter().enumerate() {
            assert_eq!(Month::from_number(i as u8 + 1).unwrap(), *m);
            assert_eq!(m.number(), i as u8 + 1);
        }
    }

    #[test]
    fn from_number_invalid() {
        assert_eq!(
            Month::from_number(0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            Month::from_number(13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn parse_full_names() {
        assert_eq!("February".parse::<Month>().unwrap(), Month::February);
        assert_eq!("june".parse::<Month>().unwrap(), Month::June);
        assert_eq!("  DECEMBER ".parse::<Month>().unwrap(), Month::December);
    }

    #[test]
    fn parse_abbreviations() {
        assert_eq!("jan".parse::<Month>().unwrap(), Month::January);
        assert_eq!("Sep".parse::<Month>().unwrap(), Month::September);
        assert_eq!("MAY".parse::<Month>().unwrap(), Month::May);
    }

    #[test]
    fn parse_numbers() {
        assert_eq!("3".parse::<Month>().unwrap(), Month::March);
        assert_eq!(
            "13".parse::<Month>().unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "ju".parse::<Month>().unwrap_err(),
            CalendarError::UnknownMonth {
                name: "ju".to_string()
            }
        );
        assert!("febr".parse::<Month>().is_err());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Month::October.to_string(), "October");
    }
}
