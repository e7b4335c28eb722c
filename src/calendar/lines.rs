// src/calendar/lines.rs
//! Minimal line editor for a single event record.
//!
//! The record is held as its physical lines, each keeping its own terminator,
//! so joining them back gives the input byte for byte. Lookups hit the first
//! line that *starts* with a field name.

use super::CRLF;

pub struct FieldLines {
    lines: Vec<String>,
}

impl FieldLines {
    pub fn new(text: &str) -> Self {
        Self { lines: text.split_inclusive(CRLF).map(str::to_string).collect() }
    }

    /// Index of the first line beginning with `field`.
    pub fn find(&self, field: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.starts_with(field))
    }

    /// Text after `field` on line `idx`, without the terminator.
    pub fn value(&self, idx: usize, field: &str) -> &str {
        let line = &self.lines[idx];
        let body = line.strip_suffix(CRLF).unwrap_or(line);
        body.get(field.len()..).unwrap_or("")
    }

    /// Replace the value of `field` on line `idx`, keeping the terminator.
    pub fn set_value(&mut self, idx: usize, field: &str, value: &str) {
        let term = if self.lines[idx].ends_with(CRLF) { CRLF } else { "" };
        self.lines[idx] = format!("{field}{value}{term}");
    }

    /// Insert `line` (without terminator) right after line `idx`.
    pub fn insert_after(&mut self, idx: usize, line: &str) {
        let prev = &mut self.lines[idx];
        let term = if prev.ends_with(CRLF) {
            CRLF
        } else {
            // inserting after an unterminated last line
            prev.push_str(CRLF);
            ""
        };
        self.lines.insert(idx + 1, format!("{line}{term}"));
    }

    pub fn insert_front(&mut self, line: &str) {
        self.lines.insert(0, format!("{line}{CRLF}"));
    }

    pub fn into_string(self) -> String {
        self.lines.concat()
    }
}
