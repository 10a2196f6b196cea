//! Summary command: run the aggregate queries and report them.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use almanac_io::{CalendarSummary, write_summary};

use crate::cli::SummaryArgs;
use crate::convert;
use crate::show;

/// Print per-month counts, the busiest months and the longest event.
pub fn run(args: SummaryArgs) -> Result<()> {
    let _cmd = info_span!("summary").entered();
    let (config, calendar) = show::load(args.source)?;
    let months = convert::select_months(&args.months, &config.summary.months)?;

    for &month in &months {
        println!(
            "Events in {month} = {}",
            calendar.total_events_in_month(month)
        );
    }

    let busiest: Vec<String> = calendar
        .months_with_most_events()
        .into_iter()
        .map(|m| m.to_string())
        .collect();
    println!("Month(s) with most events: [{}]", busiest.join(", "));

    let longest = calendar.longest_event();
    if longest.is_empty() {
        println!("Longest event: (none)");
    } else {
        println!("Longest event: {longest}");
    }

    if let Some(output) = args.output {
        let summary = CalendarSummary::from_calendar(&calendar, &months);
        write_summary(&output, &summary)
            .with_context(|| format!("failed to write summary: {}", output.display()))?;
        info!(path = %output.display(), "summary written");
    }

    Ok(())
}
