// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// SMA_i = mean(values[i - period + 1 ..= i])
//
// Returns a full-length series: the first `period - 1` rows are NaN
// (insufficient history), and any NaN inside a window makes that window's
// mean NaN. The summation is per-window on purpose — a sliding sum would
// carry a NaN forward forever once one entered, and RSI relies on windows
// past the NaN becoming defined again.

/// Rolling mean of `values` over a closed `period`-row window.
///
/// Used directly for the SMA column and as the averaging step inside RSI and
/// Bollinger bands. `period == 0` yields an all-NaN series.
pub fn sma(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if period == 0 || n < period {
        return result;
    }

    for i in (period - 1)..n {
        let window = &values[i + 1 - period..=i];
        let sum: f64 = window.iter().sum();
        result[i] = sum / period as f64;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warm_up_region_is_exactly_period_minus_one_rows() {
        let values: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let out = sma(&values, 4);
        assert_eq!(out.len(), 10);
        for i in 0..3 {
            assert!(out[i].is_nan(), "row {i} should be warm-up");
        }
        for i in 3..10 {
            assert!(!out[i].is_nan(), "row {i} should be defined");
        }
    }

    #[test]
    fn known_values() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let out = sma(&values, 3);
        assert!((out[2] - 2.0).abs() < 1e-12);
        assert!((out[3] - 3.0).abs() < 1e-12);
        assert!((out[4] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn constant_input_converges_exactly() {
        let values = vec![7.5; 30];
        let out = sma(&values, 20);
        for i in 19..30 {
            assert_eq!(out[i], 7.5);
        }
    }

    #[test]
    fn input_shorter_than_period_is_all_nan() {
        let out = sma(&[1.0, 2.0], 5);
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn nan_poisons_only_windows_containing_it() {
        let values = [f64::NAN, 1.0, 2.0, 3.0, 4.0, 5.0];
        let out = sma(&values, 3);
        // Windows ending at rows 2 still include the NaN at row 0.
        assert!(out[2].is_nan());
        // From row 3 on the window has cleared the NaN.
        assert!((out[3] - 2.0).abs() < 1e-12);
        assert!((out[4] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn period_one_is_identity() {
        let values = [3.0, 1.0, 4.0];
        assert_eq!(sma(&values, 1), values);
    }
}
