// =============================================================================
// Pipeline Configuration — look-back periods for every stage
// =============================================================================
//
// Every tunable period lives here. All fields carry `#[serde(default)]` so a
// partial config file is always loadable; omitted fields fall back to the
// classic parameterisation (SMA/EMA 20, MACD 26/12/9, RSI 12,
// Ichimoku 9/26/52 displaced by 26).
//
// The Bollinger stage builds its bands around the SMA column and requires the
// same window, so `sma_period` drives both — one field, no way for the two
// to drift apart.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::EngineError;

fn default_sma_period() -> usize {
    20
}

fn default_ema_period() -> usize {
    20
}

fn default_macd_period_long() -> usize {
    26
}

fn default_macd_period_short() -> usize {
    12
}

fn default_macd_period_signal() -> usize {
    9
}

fn default_rsi_period() -> usize {
    12
}

fn default_ichimoku_tenkan_period() -> usize {
    9
}

fn default_ichimoku_kijun_period() -> usize {
    26
}

fn default_ichimoku_senkou_b_period() -> usize {
    52
}

fn default_ichimoku_shift() -> usize {
    26
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Window of the SMA column (over `midclose`) and of the Bollinger bands
    /// built around it.
    #[serde(default = "default_sma_period")]
    pub sma_period: usize,

    /// Span of the standalone EMA column (over `midclose`).
    #[serde(default = "default_ema_period")]
    pub ema_period: usize,

    /// MACD slow EMA span.
    #[serde(default = "default_macd_period_long")]
    pub macd_period_long: usize,

    /// MACD fast EMA span.
    #[serde(default = "default_macd_period_short")]
    pub macd_period_short: usize,

    /// Span of the EMA applied to the MACD column itself.
    #[serde(default = "default_macd_period_signal")]
    pub macd_period_signal: usize,

    /// Window for the gain/loss averages inside RSI.
    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,

    /// Ichimoku conversion-line (Tenkan-sen) high/low window.
    #[serde(default = "default_ichimoku_tenkan_period")]
    pub ichimoku_tenkan_period: usize,

    /// Ichimoku base-line (Kijun-sen) high/low window.
    #[serde(default = "default_ichimoku_kijun_period")]
    pub ichimoku_kijun_period: usize,

    /// Ichimoku leading-span-B high/low window.
    #[serde(default = "default_ichimoku_senkou_b_period")]
    pub ichimoku_senkou_b_period: usize,

    /// Displacement applied to the Chikou span (backwards) and the Senkou
    /// spans (forwards), and the guard on the signal's historical comparison.
    #[serde(default = "default_ichimoku_shift")]
    pub ichimoku_shift: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sma_period: default_sma_period(),
            ema_period: default_ema_period(),
            macd_period_long: default_macd_period_long(),
            macd_period_short: default_macd_period_short(),
            macd_period_signal: default_macd_period_signal(),
            rsi_period: default_rsi_period(),
            ichimoku_tenkan_period: default_ichimoku_tenkan_period(),
            ichimoku_kijun_period: default_ichimoku_kijun_period(),
            ichimoku_senkou_b_period: default_ichimoku_senkou_b_period(),
            ichimoku_shift: default_ichimoku_shift(),
        }
    }
}

impl PipelineConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        info!(path = %path.as_ref().display(), "loaded pipeline config");
        Ok(config)
    }

    /// Reject zero periods. A zero window has no defined mean or extreme.
    pub fn validate(&self) -> Result<(), EngineError> {
        let fields: [(&'static str, usize); 10] = [
            ("sma_period", self.sma_period),
            ("ema_period", self.ema_period),
            ("macd_period_long", self.macd_period_long),
            ("macd_period_short", self.macd_period_short),
            ("macd_period_signal", self.macd_period_signal),
            ("rsi_period", self.rsi_period),
            ("ichimoku_tenkan_period", self.ichimoku_tenkan_period),
            ("ichimoku_kijun_period", self.ichimoku_kijun_period),
            ("ichimoku_senkou_b_period", self.ichimoku_senkou_b_period),
            ("ichimoku_shift", self.ichimoku_shift),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(EngineError::InvalidPeriod { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_parameterisation() {
        let config = PipelineConfig::default();
        assert_eq!(config.sma_period, 20);
        assert_eq!(config.ema_period, 20);
        assert_eq!(config.macd_period_long, 26);
        assert_eq!(config.macd_period_short, 12);
        assert_eq!(config.macd_period_signal, 9);
        assert_eq!(config.rsi_period, 12);
        assert_eq!(config.ichimoku_tenkan_period, 9);
        assert_eq!(config.ichimoku_kijun_period, 26);
        assert_eq!(config.ichimoku_senkou_b_period, 52);
        assert_eq!(config.ichimoku_shift, 26);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: PipelineConfig = serde_json::from_str(r#"{"rsi_period": 14}"#).unwrap();
        assert_eq!(config.rsi_period, 14);
        assert_eq!(config.sma_period, 20);
        assert_eq!(config.ichimoku_shift, 26);
    }

    #[test]
    fn validate_rejects_zero_period() {
        let mut config = PipelineConfig::default();
        config.rsi_period = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidPeriod {
                name: "rsi_period",
                value: 0
            }
        ));
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(PipelineConfig::default().validate().is_ok());
    }
}
