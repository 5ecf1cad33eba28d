// =============================================================================
// Error taxonomy for the indicator engine
// =============================================================================
//
// Only structural problems are errors: a missing input column, an empty
// table, a malformed config. Numerical edge cases (insufficient history,
// zero average loss in RSI, out-of-range Ichimoku lookbacks) are *not*
// errors — they degrade to NaN, ±inf or a zero signal per stage policy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A column the pipeline needs is not present in the table.
    #[error("missing required column '{name}'")]
    MissingColumn { name: String },

    /// The engine was handed a table with zero rows.
    #[error("table has no rows")]
    EmptyTable,

    /// A stage tried to insert a column whose length differs from the table's.
    #[error("column '{name}' has {got} rows, table has {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// A stage tried to overwrite an existing column. Columns are append-only.
    #[error("column '{name}' already exists")]
    DuplicateColumn { name: String },

    /// A configured look-back period is unusable (zero).
    #[error("invalid period for {name}: {value}")]
    InvalidPeriod { name: &'static str, value: usize },

    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}
