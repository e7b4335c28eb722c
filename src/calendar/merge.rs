// src/calendar/merge.rs
use std::collections::HashSet;

use super::EventRecord;

/// Drop exact textual duplicates, keeping each record's first occurrence
/// and the overall order.
pub fn merge(events: Vec<EventRecord>) -> Vec<EventRecord> {
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(events.len());
        events.iter().map(|e| seen.insert(e.as_str())).collect()
    };

    events
        .into_iter()
        .zip(keep)
        .filter_map(|(e, first)| first.then_some(e))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(s: &str) -> EventRecord {
        format!("BEGIN:VEVENT\r\nUID:{s}\r\nEND:VEVENT\r\n")
    }

    #[test]
    fn keeps_first_occurrence_in_order() {
        let (a, b, c) = (ev("a"), ev("b"), ev("c"));
        let out = merge(vec![a.clone(), b.clone(), a.clone(), c.clone(), b.clone()]);
        assert_eq!(out, vec![a, b, c]);
    }

    #[test]
    fn near_duplicates_survive() {
        let a = ev("a");
        let a_crlf_less = a.trim_end().to_string();
        let out = merge(vec![a.clone(), a_crlf_less.clone()]);
        assert_eq!(out, vec![a, a_crlf_less]);
    }

    #[test]
    fn empty_in_empty_out() {
        assert!(merge(Vec::new()).is_empty());
    }
}
