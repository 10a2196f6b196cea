//! Month-keyed ordered event container.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::{debug, trace};

use crate::event::Event;
use crate::month::Month;

/// Events grouped by month.
///
/// Keys iterate in natural month order and a month is present only while it
/// holds at least one event. Every query is total: absence is reported as
/// `0` or an empty name rather than an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventCalendar {
    months: BTreeMap<Month, Vec<Event>>,
}

impl EventCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an event to the sequence of its month.
    ///
    /// The sequence is scanned from the front and the event is inserted in
    /// front of the first stored event that occurs before it. If no stored
    /// event does, the event is appended.
    pub fn add_event(&mut self, event: Event) {
        let month = event.month();
        let events = self.months.entry(month).or_default();
        let index = events
            .iter()
            .position(|e| e.occurs_before(&event))
            .unwrap_or(events.len());
        trace!(month = %month, index, name = event.name(), "inserting event");
        events.insert(index, event);
    }

    /// Returns the number of events stored for `month`, or `0` if none.
    pub fn total_events_in_month(&self, month: Month) -> usize {
        self.months.get(&month).map_or(0, Vec::len)
    }

    /// Returns every month that set a new record count during a single
    /// scan in natural order.
    ///
    /// Months recorded under an earlier, smaller maximum are kept, so with
    /// counts January=2, February=2, March=5 the result is
    /// `{January, March}`.
    pub fn months_with_most_events(&self) -> BTreeSet<Month> {
        let mut result = BTreeSet::new();
        let mut max = 0;
        for (&month, events) in &self.months {
            if events.len() > max {
                max = events.len();
                result.insert(month);
            }
        }
        result
    }

    /// Returns the name of the longest event, or `""` if there is none.
    ///
    /// Months are scanned in natural order and events in stored order; on a
    /// tie the first event seen wins. Events of zero duration never qualify.
    pub fn longest_event(&self) -> &str {
        self.longest_event_entry().map_or("", Event::name)
    }

    /// Returns the event selected by [`longest_event`](Self::longest_event).
    pub fn longest_event_entry(&self) -> Option<&Event> {
        let mut best: Option<&Event> = None;
        let mut longest = 0;
        for event in self.months.values().flatten() {
            if event.duration() > longest {
                longest = event.duration();
                best = Some(event);
            }
        }
        best
    }

    /// Removes every event falling on `day_of_week` (1 = Monday, 7 = Sunday)
    /// from each listed month and returns how many were removed.
    ///
    /// Months missing from the calendar are skipped. A month left without
    /// events is dropped from the calendar.
    #[tracing::instrument(skip(self))]
    pub fn cancel_events(&mut self, months: &[Month], day_of_week: u8) -> usize {
        let mut removed = 0;
        for month in months {
            let Some(events) = self.months.get_mut(month) else {
                continue;
            };
            let before = events.len();
            events.retain(|e| e.day_of_week() != day_of_week);
            let n = before - events.len();
            removed += n;
            debug!(month = %month, removed = n, remaining = events.len(), "cancelled events");

            if events.is_empty() {
                self.months.remove(month);
                debug!(month = %month, "month emptied");
            }
        }
        removed
    }

    /// Returns the total number of events across all months.
    pub fn len(&self) -> usize {
        self.months.values().map(Vec::len).sum()
    }

    /// Returns `true` if the calendar holds no events.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Returns the months that hold events, in natural order.
    pub fn months(&self) -> impl Iterator<Item = Month> + '_ {
        self.months.keys().copied()
    }

    /// Returns the events stored for `month` in stored order.
    pub fn events(&self, month: Month) -> &[Event] {
        self.months.get(&month).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates `(month, events)` pairs in natural month order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, &[Event])> + '_ {
        self.months.iter().map(|(&m, events)| (m, events.as_slice()))
    }
}

impl Extend<Event> for EventCalendar {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        for event in iter {
            self.add_event(event);
        }
    }
}

impl FromIterator<Event> for EventCalendar {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        let mut calendar = Self::new();
        calendar.extend(iter);
        calendar
    }
}

impl fmt::Display for EventCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "(no events)");
        }
        for (month, events) in self.iter() {
            writeln!(f, "{month}")?;
            for event in events {
                writeln!(f, "  {event}")?;
            }
        }
        Ok(())
    }
}
