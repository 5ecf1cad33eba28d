// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
//   alpha = 2 / (period + 1)
//   EMA_0 = values[0]
//   EMA_i = alpha * values[i] + (1 - alpha) * EMA_{i-1}
//
// Seeded from the first observation, so the series is defined from row 0 —
// there is no warm-up gap, unlike SMA. The recurrence is an explicit fold in
// row order; it cannot be parallelised or windowed.

/// Exponential moving average of `values` with smoothing span `period`.
///
/// Reused by the EMA column and three times inside MACD. `period == 0` or an
/// empty input yields an all-NaN/empty series. A NaN input propagates into
/// every subsequent row through the recurrence.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    if period == 0 {
        return vec![f64::NAN; n];
    }
    if n == 0 {
        return Vec::new();
    }

    let alpha = 2.0 / (period as f64 + 1.0);

    let mut result = Vec::with_capacity(n);
    let mut prev = values[0];
    result.push(prev);
    for &v in &values[1..] {
        prev = alpha * v + (1.0 - alpha) * prev;
        result.push(prev);
    }

    result
}
