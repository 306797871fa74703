// File: crates/email-eda/src/lib.rs
// Summary: Exploratory analysis over a small email metadata table: dataset, text report, charts.

pub mod charts;
pub mod dataset;
pub mod error;
pub mod report;

pub use dataset::{Column, Columns, Dataset, EmailRecord, FieldType};
pub use error::DatasetError;
pub use report::{write_report, DatasetInfo, Summary};
