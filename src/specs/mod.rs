// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge about the league portal. Each spec covers one endpoint
//! and encodes *where the data lives* and *how to read it robustly*.
//!
//! - `teams` – the team dropdown on the schedule page; turns a configured team
//!   name into the portal's internal `ms_liga_id`.
//! - `feed` – the per-team iCalendar feed, returned with CRLF line endings.
//!
//! Specs only read. Rewriting, merging and writing the calendar live in
//! `calendar`, `runner` and `file`.
//!
//! ## Typical call chain
//! ```text
//! runner → specs::teams::resolve → specs::feed::fetch_feed → calendar::*
//! ```
pub mod feed;
pub mod teams;
