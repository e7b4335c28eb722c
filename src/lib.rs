// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod calendar;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod file;
pub mod log;
pub mod portal;
pub mod progress;
pub mod runner;

pub use error::{Error, Result};
