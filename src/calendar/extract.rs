// src/calendar/extract.rs
use std::sync::LazyLock;

use regex::Regex;

use super::EventRecord;

// At least one line sits between the markers. A bodiless BEGIN/END pair runs
// on to the next END:VEVENT, so it and the following event form one record.
static RE_VEVENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)BEGIN:VEVENT\r?\n.*?\r?\nEND:VEVENT\r?\n").expect("invalid regex: vevent")
});

/// Cut every VEVENT span out of a feed, in feed order.
/// Each record includes its trailing line break. No events yields an empty vec.
pub fn extract_events(ics: &str) -> Vec<EventRecord> {
    RE_VEVENT.find_iter(ics).map(|m| m.as_str().to_string()).collect()
}
