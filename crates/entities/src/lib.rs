//! Core entity definitions for fitlog.
//!
//! This crate defines the data types shared across the exercise tracker:
//! the user aggregate, its exercise log entries, and calendar-date
//! parsing and formatting helpers.

mod exercise;
mod user;

pub use exercise::*;
pub use user::*;
