// File: crates/email-eda/tests/dataset.rs
// Purpose: Shape, ordering and column access of the sample dataset; builder failure modes.

use chrono::NaiveDate;
use email_eda::dataset::date_range;
use email_eda::{Column, Columns, Dataset, DatasetError, FieldType};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn sample_has_five_records_and_seven_fields() {
    let ds = Dataset::sample().expect("sample builds");
    assert_eq!(ds.len(), 5);
    assert_eq!(Dataset::FIELDS.len(), 7);
    for (name, ty) in Dataset::FIELDS {
        let col = ds.column(name).unwrap_or_else(|| panic!("column {name}"));
        assert_eq!(col.len(), 5, "{name}");
        assert_eq!(col.field_type(), ty, "{name}");
    }
}

#[test]
fn dates_increase_by_one_day_from_new_year() {
    let ds = Dataset::sample().unwrap();
    let Some(Column::Date(dates)) = ds.column("date") else { panic!("date column") };
    assert_eq!(dates.first(), Some(&ymd(2023, 1, 1)));
    assert_eq!(dates.last(), Some(&ymd(2023, 1, 5)));
    for pair in dates.windows(2) {
        assert_eq!((pair[1] - pair[0]).num_days(), 1);
    }
}

#[test]
fn records_keep_insertion_order() {
    let ds = Dataset::sample().unwrap();
    let subjects: Vec<&str> = ds.records().iter().map(|r| r.subject.as_str()).collect();
    assert_eq!(
        subjects,
        vec!["Urgent: Meeting Today", "Project Update", "Contract Discussion", "Weekly Newsletter", "Performance Review"]
    );
    assert_eq!(ds.column("size_kb"), Some(Column::UInt(vec![150, 230, 540, 1200, 180])));
    assert_eq!(ds.column("is_read"), Some(Column::Bool(vec![true, true, false, false, true])));
}

#[test]
fn sample_is_deterministic() {
    assert_eq!(Dataset::sample().unwrap(), Dataset::sample().unwrap());
}

#[test]
fn head_clamps_to_length() {
    let ds = Dataset::sample().unwrap();
    assert_eq!(ds.head(5).len(), 5);
    assert_eq!(ds.head(50).len(), 5);
    assert_eq!(ds.head(2)[1].sender, "colleague@company.com");
}

#[test]
fn mismatched_column_lengths_fail_fast() {
    let cols = Columns {
        sender: vec!["a@x.com".into(), "b@x.com".into()],
        recipient: vec!["c@x.com".into(), "c@x.com".into()],
        subject: vec!["hi".into(), "yo".into()],
        date: date_range(ymd(2023, 1, 1), 2).unwrap(),
        size_kb: vec![10],
        is_read: vec![true, false],
        category: vec!["work".into(), "work".into()],
    };
    let err = Dataset::from_columns(cols).unwrap_err();
    assert_eq!(err, DatasetError::LengthMismatch { column: "size_kb", expected: 2, found: 1 });
    assert_eq!(err.to_string(), "column 'size_kb' has 1 values, expected 2");
}

#[test]
fn empty_columns_build_an_empty_dataset() {
    let ds = Dataset::from_columns(Columns::default()).unwrap();
    assert!(ds.is_empty());
    assert!(ds.head(5).is_empty());
    assert_eq!(ds.column("sender").map(|c| c.field_type()), Some(FieldType::Text));
}

#[test]
fn date_range_lengths() {
    assert!(date_range(ymd(2023, 1, 1), 0).unwrap().is_empty());
    let feb = date_range(ymd(2024, 2, 28), 3).unwrap();
    assert_eq!(feb, vec![ymd(2024, 2, 28), ymd(2024, 2, 29), ymd(2024, 3, 1)]);
}
