// File: crates/email-eda/src/error.rs
// Summary: Errors raised while assembling the dataset.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("column '{column}' has {found} values, expected {expected}")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("daily range of {periods} dates from {start} leaves the calendar")]
    DateOutOfRange { start: NaiveDate, periods: usize },
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}
