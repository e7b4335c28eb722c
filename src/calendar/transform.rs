// src/calendar/transform.rs
use super::lines::FieldLines;
use super::{BEGIN_VEVENT, DTSTART, EventRecord, SUMMARY, UID};
use crate::config::consts::UID_DOMAIN;

/// Rewrite one event for the merged calendar.
///
/// - `UID:x` becomes `UID:<prefix>-x`. Without a UID line one is synthesized
///   from a content hash and inserted after the first `DTSTART` line.
/// - `SUMMARY:x` becomes `SUMMARY:x [<team_label>]`.
///
/// Only the first matching line of each field is touched.
pub fn transform(event: &str, prefix: &str, team_label: &str) -> EventRecord {
    let mut lines = FieldLines::new(event);

    match lines.find(UID) {
        Some(i) if !lines.value(i, UID).is_empty() => {
            let uid = format!("{prefix}-{}", lines.value(i, UID));
            lines.set_value(i, UID, &uid);
        }
        // present but blank: fill it rather than add a second UID
        Some(i) => lines.set_value(i, UID, &synth_uid(event, prefix)),
        None => {
            let line = format!("{UID}{}", synth_uid(event, prefix));
            match lines.find(DTSTART).or_else(|| lines.find(BEGIN_VEVENT)) {
                Some(i) => lines.insert_after(i, &line),
                None => lines.insert_front(&line),
            }
        }
    }

    if let Some(i) = lines.find(SUMMARY) {
        let summary = lines.value(i, SUMMARY);
        if !summary.is_empty() {
            let annotated = format!("{summary} [{team_label}]");
            lines.set_value(i, SUMMARY, &annotated);
        }
    }

    lines.into_string()
}

/// `<prefix>-<hash>@basketball-bund.net`, deterministic for identical input.
pub fn synth_uid(event: &str, prefix: &str) -> String {
    format!("{prefix}-{}@{UID_DOMAIN}", content_hash(event))
}

/// First 64 bits of the BLAKE3 digest.
pub fn content_hash(text: &str) -> u64 {
    let digest = blake3::hash(text.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(head)
}
