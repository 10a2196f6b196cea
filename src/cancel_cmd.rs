//! Cancel command: drop events on a weekday from selected months.

use anyhow::Result;
use tracing::{info, info_span};

use crate::cli::CancelArgs;
use crate::convert;
use crate::show;

/// Run the bulk cancellation and print the calendar afterwards.
pub fn run(args: CancelArgs) -> Result<()> {
    let _cmd = info_span!("cancel").entered();
    let (config, mut calendar) = show::load(args.source)?;

    let months = convert::select_months(&args.months, &config.cancel.months)?;
    let weekday = convert::parse_weekday(args.weekday.unwrap_or(config.cancel.weekday))?;

    let listed: Vec<String> = months.iter().map(|m| m.to_string()).collect();
    println!("Cancelling weekday {weekday} events in [{}]", listed.join(", "));

    let cancelled = calendar.cancel_events(&months, weekday);
    info!(cancelled, remaining = calendar.len(), "events cancelled");

    println!("Cancelled {cancelled} event(s)");
    println!();
    println!("After cancelling:");
    print!("{calendar}");
    Ok(())
}
