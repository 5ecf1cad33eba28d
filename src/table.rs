// =============================================================================
// Table — ordered named columns over a shared row axis
// =============================================================================
//
// All series are `Vec<f64>` of identical length, aligned 1:1 by row position.
// Undefined entries (warm-up regions, missing deltas) are `f64::NAN`; they
// are preserved, never dropped. Columns are append-only: a stage may read
// anything written before it, but nothing is ever removed or overwritten.
//
// A parallel `dates` vector identifies rows for callers; it plays no role in
// any computation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::error::EngineError;
use crate::types::Quote;

/// The input columns every table must carry before the pipeline runs.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "bidopen", "askopen", "bidclose", "askclose", "bidhigh", "askhigh", "bidlow", "asklow",
];

#[derive(Debug, Clone)]
pub struct Table {
    dates: Vec<DateTime<Utc>>,
    /// Column names in production order.
    order: Vec<String>,
    columns: HashMap<String, Vec<f64>>,
}

impl Table {
    /// A table with a date axis and no columns yet, for callers assembling
    /// columns by hand. Fails with `EmptyTable` when `dates` is empty.
    pub fn new(dates: Vec<DateTime<Utc>>) -> Result<Self, EngineError> {
        if dates.is_empty() {
            return Err(EngineError::EmptyTable);
        }
        Ok(Self {
            dates,
            order: Vec::new(),
            columns: HashMap::new(),
        })
    }

    /// Build a table from raw quotes, oldest first.
    ///
    /// Populates the eight bid/ask OHLC columns and the date axis. Fails with
    /// `EmptyTable` when `quotes` is empty.
    pub fn from_quotes(quotes: &[Quote]) -> Result<Self, EngineError> {
        let mut table = Self::new(quotes.iter().map(|q| q.date).collect())?;

        table.insert("bidopen", quotes.iter().map(|q| q.bidopen).collect())?;
        table.insert("askopen", quotes.iter().map(|q| q.askopen).collect())?;
        table.insert("bidclose", quotes.iter().map(|q| q.bidclose).collect())?;
        table.insert("askclose", quotes.iter().map(|q| q.askclose).collect())?;
        table.insert("bidhigh", quotes.iter().map(|q| q.bidhigh).collect())?;
        table.insert("askhigh", quotes.iter().map(|q| q.askhigh).collect())?;
        table.insert("bidlow", quotes.iter().map(|q| q.bidlow).collect())?;
        table.insert("asklow", quotes.iter().map(|q| q.asklow).collect())?;

        Ok(table)
    }

    /// Number of rows shared by every column.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Append a new column. Rejects duplicate names and length mismatches.
    pub fn insert(&mut self, name: &str, values: Vec<f64>) -> Result<(), EngineError> {
        if self.columns.contains_key(name) {
            return Err(EngineError::DuplicateColumn {
                name: name.to_string(),
            });
        }
        if values.len() != self.len() {
            return Err(EngineError::LengthMismatch {
                name: name.to_string(),
                expected: self.len(),
                got: values.len(),
            });
        }
        self.order.push(name.to_string());
        self.columns.insert(name.to_string(), values);
        Ok(())
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(|v| v.as_slice())
    }

    /// Look up a column the caller cannot proceed without.
    pub fn require(&self, name: &str) -> Result<&[f64], EngineError> {
        self.column(name).ok_or_else(|| EngineError::MissingColumn {
            name: name.to_string(),
        })
    }

    /// Column names in the order they were written.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// The date axis, one entry per row.
    pub fn dates(&self) -> &[DateTime<Utc>] {
        &self.dates
    }

    /// Row position of the first entry with the given date, if any.
    pub fn row_of(&self, date: DateTime<Utc>) -> Option<usize> {
        self.dates.iter().position(|d| *d == date)
    }
}
