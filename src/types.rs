// =============================================================================
// Shared types for the indicator pipeline
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One raw timestep of quote history: bid and ask OHLC plus its timestamp.
///
/// The `date` is carried through the table as an identifier only; row order,
/// not the timestamp, drives every computation. Rows must be supplied oldest
/// first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub date: DateTime<Utc>,
    pub bidopen: f64,
    pub askopen: f64,
    pub bidclose: f64,
    pub askclose: f64,
    pub bidhigh: f64,
    pub askhigh: f64,
    pub bidlow: f64,
    pub asklow: f64,
}
