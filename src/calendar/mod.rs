// src/calendar/mod.rs
//! Text-level iCalendar handling.
//!
//! Events are never parsed into structs. A record stays the exact text span
//! cut out of the feed, and only the few fields we touch (`UID`, `SUMMARY`)
//! are rewritten in place; every other byte passes through untouched.

pub mod assemble;
pub mod extract;
pub mod lines;
pub mod merge;
pub mod transform;

/// One `BEGIN:VEVENT` … `END:VEVENT\r\n` span, verbatim.
pub type EventRecord = String;

pub const BEGIN_VEVENT: &str = "BEGIN:VEVENT";
pub const UID: &str = "UID:";
pub const DTSTART: &str = "DTSTART";
pub const SUMMARY: &str = "SUMMARY:";
pub const CRLF: &str = "\r\n";

pub use assemble::{assemble, assemble_at};
pub use extract::extract_events;
pub use merge::merge;
pub use transform::transform;
