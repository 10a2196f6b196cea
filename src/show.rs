//! Show command: print the calendar.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use almanac_calendar::EventCalendar;
use almanac_io::load_calendar;

use crate::cli::{ShowArgs, SourceArgs};
use crate::config::AlmanacConfig;
use crate::convert;

/// Loads the configuration and the calendar it points at.
pub fn load(source: SourceArgs) -> Result<(AlmanacConfig, EventCalendar)> {
    let config = AlmanacConfig::load(source.config.as_deref())?;
    let path = convert::events_path(&config.io, source.events);

    info!(path = %path.display(), "reading events");
    let calendar = load_calendar(&path)
        .with_context(|| format!("failed to load events: {}", path.display()))?;
    Ok((config, calendar))
}

/// Print every month and its events in stored order.
pub fn run(args: ShowArgs) -> Result<()> {
    let _cmd = info_span!("show").entered();
    let (_, calendar) = load(args.source)?;
    print!("{calendar}");
    Ok(())
}
