// File: crates/email-eda/src/report.rs
// Summary: Text summary of the dataset: structure, leading rows, and email counts.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::io::{self, Write};

use chart_core::value_counts;

use crate::dataset::{Dataset, EmailRecord, FieldType};

/// Rows shown in the preview table.
pub const HEAD_ROWS: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: &'static str,
    pub dtype: FieldType,
    pub non_null: usize,
    pub missing: usize,
}

/// Structural description: entry count and per-column type and completeness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetInfo {
    pub entries: usize,
    pub columns: Vec<ColumnInfo>,
}

impl DatasetInfo {
    pub fn compute(dataset: &Dataset) -> Self {
        let columns = Dataset::FIELDS
            .iter()
            .filter_map(|&(name, dtype)| {
                let col = dataset.column(name)?;
                let missing = col.missing();
                Some(ColumnInfo { name, dtype, non_null: col.len() - missing, missing })
            })
            .collect();
        Self { entries: dataset.len(), columns }
    }
}

impl fmt::Display for DatasetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entries {
            0 => writeln!(f, "<Dataset: 0 entries>")?,
            n => writeln!(f, "<Dataset: {} entries, 0 to {}>", n, n - 1)?,
        }
        writeln!(f, "Data columns (total {} columns):", self.columns.len())?;

        let name_w = self.columns.iter().map(|c| c.name.len()).max().unwrap_or(0).max("Column".len());
        writeln!(f, " {:<3} {:<name_w$}  {:>8}  {:>7}  {}", "#", "Column", "Non-Null", "Missing", "Dtype")?;
        writeln!(f, " {:<3} {:<name_w$}  {:>8}  {:>7}  {}", "---", "------", "--------", "-------", "-----")?;
        for (i, c) in self.columns.iter().enumerate() {
            writeln!(f, " {:<3} {:<name_w$}  {:>8}  {:>7}  {}", i, c.name, c.non_null, c.missing, c.dtype.dtype())?;
        }

        let mut tally: BTreeMap<FieldType, usize> = BTreeMap::new();
        for c in &self.columns {
            *tally.entry(c.dtype).or_default() += 1;
        }
        let dtypes = tally.iter().map(|(t, n)| format!("{}({})", t.dtype(), n)).collect::<Vec<_>>();
        writeln!(f, "dtypes: {}", dtypes.join(", "))
    }
}

/// Aligned table of records with a leading row index.
pub struct HeadTable<'a> {
    rows: &'a [EmailRecord],
}

impl<'a> HeadTable<'a> {
    pub fn new(rows: &'a [EmailRecord]) -> Self { Self { rows } }

    fn cells(r: &EmailRecord) -> [String; 7] {
        [
            r.sender.clone(),
            r.recipient.clone(),
            r.subject.clone(),
            r.date.format("%Y-%m-%d").to_string(),
            r.size_kb.to_string(),
            r.is_read.to_string(),
            r.category.clone(),
        ]
    }
}

impl fmt::Display for HeadTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = Dataset::FIELDS.map(|(name, _)| name);
        if self.rows.is_empty() {
            return writeln!(f, "Empty Dataset\nColumns: [{}]", names.join(", "));
        }

        let rows: Vec<[String; 7]> = self.rows.iter().map(Self::cells).collect();
        let idx_w = (self.rows.len() - 1).to_string().len();
        let mut widths = names.map(str::len);
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }
        // text columns read better left-aligned
        let left = Dataset::FIELDS.map(|(_, t)| matches!(t, FieldType::Text | FieldType::Date));

        write_row(f, "", idx_w, &names, &widths, &left)?;
        for (i, row) in rows.iter().enumerate() {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            write_row(f, &i.to_string(), idx_w, &cells, &widths, &left)?;
        }
        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, idx: &str, idx_w: usize, cells: &[&str], widths: &[usize], left: &[bool]) -> fmt::Result {
    write!(f, "{:<idx_w$}", idx)?;
    for ((cell, &w), &l) in cells.iter().zip(widths).zip(left) {
        if l { write!(f, "  {:<w$}", cell)?; } else { write!(f, "  {:>w$}", cell)?; }
    }
    writeln!(f)
}

/// Headline counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub unique_senders: usize,
    pub read: usize,
    /// Always `total - read`.
    pub unread: usize,
    /// Records per category, descending, ties in first-seen order.
    pub by_category: Vec<(String, usize)>,
    /// Records per sender, descending, ties in first-seen order.
    pub by_sender: Vec<(String, usize)>,
}

impl Summary {
    pub fn compute(dataset: &Dataset) -> Self {
        let records = dataset.records();
        let total = records.len();
        let unique_senders = records.iter().map(|r| r.sender.as_str()).collect::<HashSet<_>>().len();
        let read = records.iter().filter(|r| r.is_read).count();
        Self {
            total,
            unique_senders,
            read,
            unread: total - read,
            by_category: value_counts(records.iter().map(|r| r.category.as_str())),
            by_sender: value_counts(records.iter().map(|r| r.sender.as_str())),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total emails: {}", self.total)?;
        writeln!(f, "Unique senders: {}", self.unique_senders)?;
        writeln!(f, "Read emails: {}", self.read)?;
        writeln!(f, "Unread emails: {}", self.unread)
    }
}

/// Write the full report (info, preview rows, email analysis) to `out`.
pub fn write_report<W: Write>(dataset: &Dataset, mut out: W) -> io::Result<Summary> {
    writeln!(out, "Dataset Info:")?;
    write!(out, "{}", DatasetInfo::compute(dataset))?;

    writeln!(out, "\nFirst {} rows:", HEAD_ROWS)?;
    write!(out, "{}", HeadTable::new(dataset.head(HEAD_ROWS)))?;

    let summary = Summary::compute(dataset);
    writeln!(out, "\nEmail Analysis:")?;
    write!(out, "{}", summary)?;
    out.flush()?;
    Ok(summary)
}
