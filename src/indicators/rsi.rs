// =============================================================================
// Relative Strength Index (RSI) — SMA-averaged gains and losses
// =============================================================================
//
// Step 1 — delta_i = column_i - column_{i-1}; row 0 has no delta and stays
//          NaN (it is *not* zero-filled).
// Step 2 — RSI_up keeps positive deltas (negatives become 0), RSI_down keeps
//          negative deltas (positives become 0); the NaN at row 0 survives
//          the clipping.
// Step 3 — AVG_Gain = SMA(period, RSI_up), AVG_Loss = |SMA(period, RSI_down)|.
// Step 4 — RS = AVG_Gain / AVG_Loss,  RSI = 100 - 100 / (1 + RS).
//
// Because the first delta is NaN, every averaging window containing row 0 is
// NaN too, so the first defined RSI lands at row `period` rather than
// `period - 1`. That one-row shift is the documented behaviour; keep it.
//
// Boundary case: when AVG_Loss is 0 the division is left to IEEE arithmetic —
// RS = +inf when AVG_Gain > 0 (RSI exactly 100), RS = NaN on a flat window
// (0/0, RSI undefined). Neither is clamped or special-cased.

use tracing::debug;

use crate::error::EngineError;
use crate::indicators::sma::sma;
use crate::table::Table;

/// Write `RSI_up`, `RSI_down` and `RSI` into the table.
pub fn compute(table: &mut Table, period: usize, column: &str) -> Result<(), EngineError> {
    let values = table.require(column)?;
    let n = values.len();

    let mut up = vec![f64::NAN; n];
    let mut down = vec![f64::NAN; n];
    for i in 1..n {
        let delta = values[i] - values[i - 1];
        // Comparison with NaN is false, so a NaN delta stays NaN on both sides.
        up[i] = if delta < 0.0 { 0.0 } else { delta };
        down[i] = if delta > 0.0 { 0.0 } else { delta };
    }

    let avg_gain = sma(&up, period);
    let avg_loss: Vec<f64> = sma(&down, period).iter().map(|v| v.abs()).collect();

    let rsi: Vec<f64> = avg_gain
        .iter()
        .zip(avg_loss.iter())
        .map(|(gain, loss)| {
            let rs = gain / loss;
            100.0 - 100.0 / (1.0 + rs)
        })
        .collect();

    table.insert("RSI_up", up)?;
    table.insert("RSI_down", down)?;
    table.insert("RSI", rsi)?;

    debug!(period, column, "RSI stage done");
    Ok(())
}
