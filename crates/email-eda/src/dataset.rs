// File: crates/email-eda/src/dataset.rs
// Summary: Email metadata table: record type, column schema, daily date ranges, and the fixed sample.

use chrono::{Days, NaiveDate};

use crate::error::DatasetError;

/// One email's metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailRecord {
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub date: NaiveDate,
    pub size_kb: u32,
    pub is_read: bool,
    pub category: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldType {
    Text,
    Date,
    UInt,
    Bool,
}

impl FieldType {
    pub fn dtype(&self) -> &'static str {
        match self {
            FieldType::Text => "str",
            FieldType::Date => "date",
            FieldType::UInt => "u32",
            FieldType::Bool => "bool",
        }
    }
}

/// A field's values across all records, in record order.
#[derive(Clone, Debug, PartialEq)]
pub enum Column<'a> {
    Text(Vec<&'a str>),
    Date(Vec<NaiveDate>),
    UInt(Vec<u32>),
    Bool(Vec<bool>),
}

impl Column<'_> {
    pub fn len(&self) -> usize {
        match self {
            Column::Text(v) => v.len(),
            Column::Date(v) => v.len(),
            Column::UInt(v) => v.len(),
            Column::Bool(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn field_type(&self) -> FieldType {
        match self {
            Column::Text(_) => FieldType::Text,
            Column::Date(_) => FieldType::Date,
            Column::UInt(_) => FieldType::UInt,
            Column::Bool(_) => FieldType::Bool,
        }
    }

    /// Values with no content. Only text can be blank; the other types are total.
    pub fn missing(&self) -> usize {
        match self {
            Column::Text(v) => v.iter().filter(|s| s.trim().is_empty()).count(),
            _ => 0,
        }
    }
}

/// Column-oriented input, one vector per field.
#[derive(Clone, Debug, Default)]
pub struct Columns {
    pub sender: Vec<String>,
    pub recipient: Vec<String>,
    pub subject: Vec<String>,
    pub date: Vec<NaiveDate>,
    pub size_kb: Vec<u32>,
    pub is_read: Vec<bool>,
    pub category: Vec<String>,
}

/// Ordered, immutable collection of records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<EmailRecord>,
}

impl Dataset {
    /// Field names and types in column order.
    pub const FIELDS: [(&'static str, FieldType); 7] = [
        ("sender", FieldType::Text),
        ("recipient", FieldType::Text),
        ("subject", FieldType::Text),
        ("date", FieldType::Date),
        ("size_kb", FieldType::UInt),
        ("is_read", FieldType::Bool),
        ("category", FieldType::Text),
    ];

    /// Zip columns into records. Every column must match the length of `sender`.
    pub fn from_columns(columns: Columns) -> Result<Self, DatasetError> {
        let expected = columns.sender.len();
        let lengths = [
            ("recipient", columns.recipient.len()),
            ("subject", columns.subject.len()),
            ("date", columns.date.len()),
            ("size_kb", columns.size_kb.len()),
            ("is_read", columns.is_read.len()),
            ("category", columns.category.len()),
        ];
        if let Some(&(column, found)) = lengths.iter().find(|(_, n)| *n != expected) {
            return Err(DatasetError::LengthMismatch { column, expected, found });
        }

        let records = columns
            .sender
            .into_iter()
            .zip(columns.recipient)
            .zip(columns.subject)
            .zip(columns.date)
            .zip(columns.size_kb)
            .zip(columns.is_read)
            .zip(columns.category)
            .map(|((((((sender, recipient), subject), date), size_kb), is_read), category)| EmailRecord {
                sender,
                recipient,
                subject,
                date,
                size_kb,
                is_read,
                category,
            })
            .collect();
        Ok(Self { records })
    }

    /// The fixed five-email sample, dated one per day from 2023-01-01.
    pub fn sample() -> Result<Self, DatasetError> {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1)
            .ok_or(DatasetError::InvalidDate { year: 2023, month: 1, day: 1 })?;
        let strings = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self::from_columns(Columns {
            sender: strings(&[
                "boss@company.com",
                "colleague@company.com",
                "client@external.com",
                "newsletter@service.com",
                "boss@company.com",
            ]),
            recipient: strings(&[
                "you@company.com",
                "you@company.com",
                "you@company.com",
                "you@company.com",
                "team@company.com",
            ]),
            subject: strings(&[
                "Urgent: Meeting Today",
                "Project Update",
                "Contract Discussion",
                "Weekly Newsletter",
                "Performance Review",
            ]),
            date: date_range(start, 5)?,
            size_kb: vec![150, 230, 540, 1200, 180],
            is_read: vec![true, true, false, false, true],
            category: strings(&["work", "work", "work", "promotion", "work"]),
        })
    }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn records(&self) -> &[EmailRecord] { &self.records }

    /// First `n` records (fewer if the dataset is shorter).
    pub fn head(&self, n: usize) -> &[EmailRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Values of the named field across all records.
    pub fn column(&self, name: &str) -> Option<Column<'_>> {
        let r = &self.records;
        let col = match name {
            "sender" => Column::Text(r.iter().map(|e| e.sender.as_str()).collect()),
            "recipient" => Column::Text(r.iter().map(|e| e.recipient.as_str()).collect()),
            "subject" => Column::Text(r.iter().map(|e| e.subject.as_str()).collect()),
            "date" => Column::Date(r.iter().map(|e| e.date).collect()),
            "size_kb" => Column::UInt(r.iter().map(|e| e.size_kb).collect()),
            "is_read" => Column::Bool(r.iter().map(|e| e.is_read).collect()),
            "category" => Column::Text(r.iter().map(|e| e.category.as_str()).collect()),
            _ => return None,
        };
        Some(col)
    }
}

/// `periods` consecutive calendar days starting at `start`.
pub fn date_range(start: NaiveDate, periods: usize) -> Result<Vec<NaiveDate>, DatasetError> {
    (0..periods)
        .map(|i| {
            start
                .checked_add_days(Days::new(i as u64))
                .ok_or(DatasetError::DateOutOfRange { start, periods })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_range_past_calendar_end_fails() {
        let start = NaiveDate::MAX;
        assert_eq!(date_range(start, 2), Err(DatasetError::DateOutOfRange { start, periods: 2 }));
    }

    #[test]
    fn unknown_column_is_none() {
        let ds = Dataset::sample().unwrap();
        assert!(ds.column("priority").is_none());
    }

    #[test]
    fn blank_text_counts_as_missing() {
        assert_eq!(Column::Text(vec!["a", "", "  "]).missing(), 2);
        assert_eq!(Column::UInt(vec![1, 2]).missing(), 0);
    }
}
