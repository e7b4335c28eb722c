// src/calendar/assemble.rs
use chrono::{DateTime, Utc};

use super::EventRecord;
use crate::config::consts::CAL_DESC_PREFIX;
use crate::config::options::CalendarOptions;

pub const STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Wrap events in a VCALENDAR, stamped with the current UTC time.
pub fn assemble(events: &[EventRecord], cal: &CalendarOptions) -> String {
    assemble_at(events, cal, Utc::now())
}

/// Events are emitted verbatim and in the given order.
pub fn assemble_at(events: &[EventRecord], cal: &CalendarOptions, now: DateTime<Utc>) -> String {
    let stamp = now.format(STAMP_FORMAT).to_string();

    let mut out = crlf!(
        "BEGIN:VCALENDAR",
        "VERSION:2.0",
        format!("PRODID:{}", cal.product_id),
        "CALSCALE:GREGORIAN",
        "METHOD:PUBLISH",
        format!("X-WR-CALNAME:{}", cal.name),
        format!("X-WR-TIMEZONE:{}", cal.timezone),
        format!("X-PUBLISHED-TTL:{}", cal.refresh_ttl),
        format!("X-WR-CALDESC:{CAL_DESC_PREFIX}{stamp}"),
    );
    for ev in events {
        out.push_str(ev);
    }
    out.push_str(&crlf!("END:VCALENDAR"));
    out
}
