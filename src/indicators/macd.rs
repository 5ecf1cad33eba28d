// =============================================================================
// Moving Average Convergence / Divergence (MACD)
// =============================================================================
//
//   MACD             = EMA(period_short) - EMA(period_long)   over `column`
//   MACD_signal_line = EMA(period_signal)                     over MACD
//
// The signal line is computed from the MACD column after it has been written
// to the table, the same read-back path any later stage would use.

use tracing::debug;

use crate::error::EngineError;
use crate::indicators::ema::ema;
use crate::table::Table;

/// Write `MACD` and `MACD_signal_line` into the table.
pub fn compute(
    table: &mut Table,
    period_long: usize,
    period_short: usize,
    period_signal: usize,
    column: &str,
) -> Result<(), EngineError> {
    let values = table.require(column)?;

    let short = ema(values, period_short);
    let long = ema(values, period_long);
    let macd: Vec<f64> = short
        .iter()
        .zip(long.iter())
        .map(|(s, l)| s - l)
        .collect();
    table.insert("MACD", macd)?;

    let signal = ema(table.require("MACD")?, period_signal);
    table.insert("MACD_signal_line", signal)?;

    debug!(period_long, period_short, period_signal, column, "MACD stage done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::midprice;
    use crate::types::Quote;
    use chrono::{TimeZone, Utc};

    fn table_from_closes(closes: &[f64]) -> Table {
        let quotes: Vec<Quote> = closes
            .iter()
            .map(|&px| Quote {
                date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                bidopen: px,
                askopen: px,
                bidclose: px,
                askclose: px,
                bidhigh: px,
                askhigh: px,
                bidlow: px,
                asklow: px,
            })
            .collect();
        let mut table = Table::from_quotes(&quotes).unwrap();
        midprice::compute(&mut table).unwrap();
        table
    }

    #[test]
    fn macd_equals_short_ema_minus_long_ema() {
        let closes: Vec<f64> = (1..=60).map(|x| (x as f64).sin() * 3.0 + 50.0).collect();
        let mut table = table_from_closes(&closes);
        compute(&mut table, 26, 12, 9, "midclose").unwrap();

        let short = ema(&closes, 12);
        let long = ema(&closes, 26);
        let macd = table.column("MACD").unwrap();
        for i in 0..closes.len() {
            let expected = short[i] - long[i];
            assert!(
                (macd[i] - expected).abs() < 1e-12,
                "row {i}: {} != {expected}",
                macd[i]
            );
        }
    }

    #[test]
    fn signal_line_is_ema_of_macd_column() {
        let closes: Vec<f64> = (1..=60).map(|x| 100.0 + (x % 7) as f64).collect();
        let mut table = table_from_closes(&closes);
        compute(&mut table, 26, 12, 9, "midclose").unwrap();

        let expected = ema(table.column("MACD").unwrap(), 9);
        let signal = table.column("MACD_signal_line").unwrap();
        for (a, b) in signal.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn flat_input_gives_zero_macd_and_signal() {
        let mut table = table_from_closes(&vec![10.0; 40]);
        compute(&mut table, 26, 12, 9, "midclose").unwrap();
        assert!(table.column("MACD").unwrap().iter().all(|&v| v == 0.0));
        assert!(table
            .column("MACD_signal_line")
            .unwrap()
            .iter()
            .all(|&v| v == 0.0));
    }

    #[test]
    fn missing_source_column_fails_fast() {
        let mut table = table_from_closes(&[10.0, 11.0]);
        let err = compute(&mut table, 26, 12, 9, "close").unwrap_err();
        assert!(matches!(err, EngineError::MissingColumn { name } if name == "close"));
    }
}
