// =============================================================================
// Heiken-Ashi candles
// =============================================================================
//
//   HA_close_i = (open_i + close_i + high_i + low_i) / 4
//   HA_open_0  = (open_0 + close_0) / 2
//   HA_open_i  = (HA_open_{i-1} + HA_close_{i-1}) / 2
//   HA_high_i  = max(HA_open_i, HA_close_i, high_i)
//   HA_low_i   = min(HA_open_i, HA_close_i, low_i)
//
// HA_open has no closed form; it is a strict row-order fold. Note that
// HA_high/HA_low mix the *input* high/low with the derived open/close.
//
// Signal: +1 on a bullish reversal (row i closes above its open after row
// i-1 closed below), -1 on the mirror-image bearish reversal, 0 otherwise.
// Row 0 has no prior candle, so HA_signal[0] stays NaN.

use tracing::debug;

use crate::error::EngineError;
use crate::table::Table;

/// Write `HA_close`, `HA_open`, `HA_high`, `HA_low` and `HA_signal`.
pub fn compute(
    table: &mut Table,
    column_open: &str,
    column_close: &str,
    column_high: &str,
    column_low: &str,
) -> Result<(), EngineError> {
    let open = table.require(column_open)?;
    let close = table.require(column_close)?;
    let high = table.require(column_high)?;
    let low = table.require(column_low)?;
    let n = open.len();

    let mut ha_close = Vec::with_capacity(n);
    for i in 0..n {
        ha_close.push((open[i] + close[i] + high[i] + low[i]) / 4.0);
    }

    // Sequential recurrence: each open averages the previous HA candle.
    let mut ha_open = Vec::with_capacity(n);
    ha_open.push((open[0] + close[0]) / 2.0);
    for i in 1..n {
        ha_open.push((ha_open[i - 1] + ha_close[i - 1]) / 2.0);
    }

    let mut ha_high = Vec::with_capacity(n);
    let mut ha_low = Vec::with_capacity(n);
    for i in 0..n {
        ha_high.push(ha_open[i].max(ha_close[i]).max(high[i]));
        ha_low.push(ha_open[i].min(ha_close[i]).min(low[i]));
    }

    let mut signal = vec![f64::NAN; n];
    for i in 1..n {
        let bullish = ha_close[i] > ha_open[i];
        let bearish = ha_close[i] < ha_open[i];
        let prev_bullish = ha_close[i - 1] > ha_open[i - 1];
        let prev_bearish = ha_close[i - 1] < ha_open[i - 1];
        signal[i] = if bullish && prev_bearish {
            1.0
        } else if bearish && prev_bullish {
            -1.0
        } else {
            0.0
        };
    }

    table.insert("HA_close", ha_close)?;
    table.insert("HA_open", ha_open)?;
    table.insert("HA_high", ha_high)?;
    table.insert("HA_low", ha_low)?;
    table.insert("HA_signal", signal)?;

    debug!(column_open, column_close, "Heiken-Ashi stage done");
    Ok(())
}
