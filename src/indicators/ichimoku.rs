// =============================================================================
// Ichimoku Kinko clouds
// =============================================================================
//
//   Kijun-sen   = (window-high + window-low) / 2 over `kijun_period` rows
//   Tenkan-sen  = same midpoint over `tenkan_period` rows
//   Chikou span = close shifted *back* by `shift` rows; the trailing rows
//                 that have no future close are zero-filled, not NaN
//   Senkou A    = (Tenkan + Kijun) / 2 shifted *forward* by `shift` rows
//   Senkou B    = midpoint over `senkou_b_period` rows, shifted forward
//
// The forward-shifted spans are NaN before row `shift` (and further while
// their unshifted source is still in warm-up).
//
// Signal at row i, all three required for a non-zero value:
//   (a) Tenkan crosses Kijun between i-1 and i (above: bullish, below:
//       bearish);
//   (b) close_i sits on the matching side of BOTH Senkou spans;
//   (c) the Chikou value `shift` rows back confirms against the close at
//       that same earlier row.
// Condition (c) reads row i - shift, so rows i < shift are not evaluable and
// get signal 0 instead of an out-of-range read. Row 0 has no previous row at
// all and stays NaN.

use tracing::debug;

use crate::error::EngineError;
use crate::table::Table;

/// Window and displacement parameters for the Ichimoku stage.
#[derive(Debug, Clone, Copy)]
pub struct IchimokuParams {
    pub tenkan_period: usize,
    pub kijun_period: usize,
    pub senkou_b_period: usize,
    pub shift: usize,
}

/// Midpoint of the rolling high/low channel: (window max + window min) / 2.
/// NaN for the first `window - 1` rows.
fn rolling_midpoint(high: &[f64], low: &[f64], window: usize) -> Vec<f64> {
    let n = high.len();
    let mut result = vec![f64::NAN; n];
    if window == 0 || n < window {
        return result;
    }
    for i in (window - 1)..n {
        let highest = high[i + 1 - window..=i]
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let lowest = low[i + 1 - window..=i]
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        result[i] = (highest + lowest) / 2.0;
    }
    result
}

/// Write `IK_Kijun_sen`, `IK_Tenkan_sen`, `IK_Chikou_span`,
/// `IK_Senkou_span_a`, `IK_Senkou_span_b` and `IK_signal` into the table.
pub fn compute(
    table: &mut Table,
    params: IchimokuParams,
    column_close: &str,
    column_high: &str,
    column_low: &str,
) -> Result<(), EngineError> {
    let close = table.require(column_close)?;
    let high = table.require(column_high)?;
    let low = table.require(column_low)?;
    let n = close.len();
    let shift = params.shift;

    let kijun = rolling_midpoint(high, low, params.kijun_period);
    let tenkan = rolling_midpoint(high, low, params.tenkan_period);

    // Lagging line: each row carries the close `shift` rows in the future;
    // the last `shift` rows have none and are zero-filled.
    let mut chikou = vec![0.0; n];
    for i in 0..n {
        if i + shift < n {
            chikou[i] = close[i + shift];
        }
    }

    // Leading spans: values computed at row i - shift, plotted at row i.
    let mut senkou_a = vec![f64::NAN; n];
    for i in shift..n {
        senkou_a[i] = (tenkan[i - shift] + kijun[i - shift]) / 2.0;
    }

    let senkou_b_raw = rolling_midpoint(high, low, params.senkou_b_period);
    let mut senkou_b = vec![f64::NAN; n];
    for i in shift..n {
        senkou_b[i] = senkou_b_raw[i - shift];
    }

    let mut signal = vec![f64::NAN; n];
    for i in 1..n {
        if i < shift {
            // The Chikou confirmation would read before row 0.
            signal[i] = 0.0;
            continue;
        }
        let bullish = tenkan[i] > kijun[i]
            && tenkan[i - 1] < kijun[i - 1]
            && close[i] > senkou_a[i]
            && close[i] > senkou_b[i]
            && chikou[i - shift] > close[i - shift];
        let bearish = tenkan[i] < kijun[i]
            && tenkan[i - 1] > kijun[i - 1]
            && close[i] < senkou_a[i]
            && close[i] < senkou_b[i]
            && chikou[i - shift] < close[i - shift];
        signal[i] = if bullish {
            1.0
        } else if bearish {
            -1.0
        } else {
            0.0
        };
    }

    table.insert("IK_Kijun_sen", kijun)?;
    table.insert("IK_Tenkan_sen", tenkan)?;
    table.insert("IK_Chikou_span", chikou)?;
    table.insert("IK_Senkou_span_a", senkou_a)?;
    table.insert("IK_Senkou_span_b", senkou_b)?;
    table.insert("IK_signal", signal)?;

    debug!(
        tenkan = params.tenkan_period,
        kijun = params.kijun_period,
        senkou_b = params.senkou_b_period,
        shift,
        "Ichimoku stage done"
    );
    Ok(())
}
