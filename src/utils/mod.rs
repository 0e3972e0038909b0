//! Utility functions and helpers

pub mod time;

pub use time::{end_of_day, format_locale, parse_date_lenient, start_of_day};
