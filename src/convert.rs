//! Pure conversion functions: TOML config and CLI strings -> calendar types.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use almanac_calendar::Month;

use crate::config::IoConfig;

/// Parses a month name, three-letter abbreviation or number.
pub fn parse_month(s: &str) -> Result<Month> {
    s.parse::<Month>()
        .with_context(|| format!("invalid month {s:?}"))
}

/// Parses every month in `names`, keeping order and duplicates.
pub fn parse_months(names: &[String]) -> Result<Vec<Month>> {
    names.iter().map(|s| parse_month(s)).collect()
}

/// Picks CLI months when any were given, otherwise the configured ones.
pub fn select_months(cli: &[String], config: &[String]) -> Result<Vec<Month>> {
    if cli.is_empty() {
        parse_months(config)
    } else {
        parse_months(cli)
    }
}

/// Checks that a day-of-week code is in 1..=7 (1 = Monday).
pub fn parse_weekday(day: u8) -> Result<u8> {
    if !(1..=7).contains(&day) {
        bail!("weekday must be 1 (Monday) to 7 (Sunday), got {day}");
    }
    Ok(day)
}

/// Resolves the event file path, with the CLI override taking precedence.
pub fn events_path(io: &IoConfig, cli: Option<PathBuf>) -> PathBuf {
    cli.unwrap_or_else(|| io.events.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_month_forms() {
        assert_eq!(parse_month("February").unwrap(), Month::February);
        assert_eq!(parse_month("jun").unwrap(), Month::June);
        assert_eq!(parse_month("11").unwrap(), Month::November);
    }

    #[test]
    fn parse_month_error_mentions_input() {
        let err = parse_month("Smarch").unwrap_err();
        assert!(format!("{err:#}").contains("\"Smarch\""));
    }

    #[test]
    fn parse_months_keeps_duplicates() {
        let months = parse_months(&strings(&["may", "jan", "may"])).unwrap();
        assert_eq!(months, vec![Month::May, Month::January, Month::May]);
    }

    #[test]
    fn parse_months_fails_on_any_bad_entry() {
        assert!(parse_months(&strings(&["may", "0"])).is_err());
    }

    #[test]
    fn select_months_prefers_cli() {
        let cli = strings(&["dec"]);
        let cfg = strings(&["jan", "feb"]);
        assert_eq!(select_months(&cli, &cfg).unwrap(), vec![Month::December]);
        assert_eq!(
            select_months(&[], &cfg).unwrap(),
            vec![Month::January, Month::February]
        );
    }

    #[test]
    fn weekday_bounds() {
        assert_eq!(parse_weekday(1).unwrap(), 1);
        assert_eq!(parse_weekday(7).unwrap(), 7);
        assert!(parse_weekday(0).is_err());
        assert!(parse_weekday(8).is_err());
    }

    #[test]
    fn events_path_override() {
        let io = IoConfig::default();
        assert_eq!(events_path(&io, None), PathBuf::from("events.toml"));
        assert_eq!(
            events_path(&io, Some(PathBuf::from("other.toml"))),
            PathBuf::from("other.toml")
        );
    }
}
