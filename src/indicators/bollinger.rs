// =============================================================================
// Bollinger Bands
// =============================================================================
//
//   STD_i     = rolling sample standard deviation (n-1 divisor) over the
//               same closed window convention as SMA
//   BB_upper  = SMA + 2 * STD
//   BB_lower  = SMA - 2 * STD
//   BB_signal = -1 when the source value is strictly above the upper band
//               (sell), +1 when strictly below the lower band (buy), else 0
//
// Precondition: the `sma_column` must already hold an SMA computed with the
// *same* period over the *same* source column. The engine passes one period
// to both stages; callers driving this stage directly must do the same.
//
// During warm-up the bands are NaN; a comparison against NaN is false, so
// warm-up rows get signal 0, not NaN.

use tracing::debug;

use crate::error::EngineError;
use crate::table::Table;

/// Write `STD`, `BB_upper`, `BB_lower` and `BB_signal` into the table.
pub fn compute(
    table: &mut Table,
    period: usize,
    column: &str,
    sma_column: &str,
) -> Result<(), EngineError> {
    let values = table.require(column)?;
    let sma = table.require(sma_column)?;
    let n = values.len();

    let mut std = vec![f64::NAN; n];
    if period > 0 && n >= period {
        for i in (period - 1)..n {
            let window = &values[i + 1 - period..=i];
            let mean: f64 = window.iter().sum::<f64>() / period as f64;
            let sq_sum: f64 = window.iter().map(|v| (v - mean).powi(2)).sum();
            // Sample variance: n-1 divisor. period == 1 gives 0/0 = NaN.
            std[i] = (sq_sum / (period as f64 - 1.0)).sqrt();
        }
    }

    let upper: Vec<f64> = sma.iter().zip(std.iter()).map(|(m, s)| m + 2.0 * s).collect();
    let lower: Vec<f64> = sma.iter().zip(std.iter()).map(|(m, s)| m - 2.0 * s).collect();

    let signal: Vec<f64> = values
        .iter()
        .zip(upper.iter().zip(lower.iter()))
        .map(|(v, (u, l))| {
            if v > u {
                -1.0
            } else if v < l {
                1.0
            } else {
                0.0
            }
        })
        .collect();

    table.insert("STD", std)?;
    table.insert("BB_upper", upper)?;
    table.insert("BB_lower", lower)?;
    table.insert("BB_signal", signal)?;

    debug!(period, column, "Bollinger stage done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{midprice, sma::sma};
    use crate::types::Quote;
    use chrono::{TimeZone, Utc};

    fn table_with_sma(closes: &[f64], period: usize) -> Table {
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
        let sma_series = sma(table.column("midclose").unwrap(), period);
        table.insert("SMA", sma_series).unwrap();
        table
    }

    #[test]
    fn sample_std_uses_n_minus_one_divisor() {
        let mut table = table_with_sma(&[1.0, 2.0, 3.0], 3);
        compute(&mut table, 3, "midclose", "SMA").unwrap();
        let std = table.column("STD").unwrap();
        assert!(std[0].is_nan());
        assert!(std[1].is_nan());
        // Sample variance of [1,2,3] = (1 + 0 + 1) / 2 = 1.
        assert!((std[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn band_width_is_four_stds_wherever_defined() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64).cos() * 5.0).collect();
        let mut table = table_with_sma(&closes, 20);
        compute(&mut table, 20, "midclose", "SMA").unwrap();

        let std = table.column("STD").unwrap();
        let upper = table.column("BB_upper").unwrap();
        let lower = table.column("BB_lower").unwrap();
        for i in 19..closes.len() {
            assert!((upper[i] - lower[i] - 4.0 * std[i]).abs() < 1e-12, "row {i}");
        }
    }

    #[test]
    fn signal_is_zero_during_warm_up_not_nan() {
        let closes: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
        let mut table = table_with_sma(&closes, 20);
        compute(&mut table, 20, "midclose", "SMA").unwrap();

        let signal = table.column("BB_signal").unwrap();
        for i in 0..19 {
            assert_eq!(signal[i], 0.0, "warm-up row {i}");
        }
    }

    #[test]
    fn signal_fires_on_strict_band_breach_only() {
        // A long flat run, one spike up, one spike down.
        let mut closes = vec![100.0; 30];
        closes[24] = 130.0;
        closes[28] = 70.0;
        let mut table = table_with_sma(&closes, 20);
        compute(&mut table, 20, "midclose", "SMA").unwrap();

        let signal = table.column("BB_signal").unwrap();
        assert_eq!(signal[24], -1.0, "spike above the upper band is a sell");
        assert_eq!(signal[28], 1.0, "spike below the lower band is a buy");
        // A flat row sits exactly on both bands (STD 0): not strictly outside.
        assert_eq!(signal[22], 0.0);
        for &v in signal {
            assert!(v == -1.0 || v == 0.0 || v == 1.0);
        }
    }

    #[test]
    fn flat_input_never_signals() {
        let mut table = table_with_sma(&vec![10.0; 40], 20);
        compute(&mut table, 20, "midclose", "SMA").unwrap();
        assert!(table.column("BB_signal").unwrap().iter().all(|&v| v == 0.0));
    }
}
