// =============================================================================
// IndicatorEngine — fixed-order annotation pipeline
// =============================================================================
//
// Construction validates the input table, then runs every stage in the one
// order their column dependencies allow:
//
//   midprices → SMA → EMA → MACD → RSI → Bollinger → Heiken-Ashi → Ichimoku
//
// MACD and RSI consume the EMA/SMA building blocks over `midclose`; the
// Bollinger stage reads the SMA column back out of the table; Heiken-Ashi
// and Ichimoku work from the four mid columns. The table is owned exclusively
// for the duration of the run and is read-only afterwards.
//
// A table shorter than the largest look-back still annotates fine — the
// unsatisfiable rows are NaN (or zero for signal columns), never an error.

use tracing::info;

use crate::config::PipelineConfig;
use crate::error::EngineError;
use crate::indicators::ema::ema;
use crate::indicators::ichimoku::IchimokuParams;
use crate::indicators::sma::sma;
use crate::indicators::{bollinger, heiken_ashi, ichimoku, macd, midprice, rsi};
use crate::table::{Table, REQUIRED_COLUMNS};

#[derive(Debug)]
pub struct IndicatorEngine {
    table: Table,
    config: PipelineConfig,
}

impl IndicatorEngine {
    /// Annotate `table` with the default parameterisation.
    pub fn new(table: Table) -> Result<Self, EngineError> {
        Self::with_config(table, PipelineConfig::default())
    }

    /// Annotate `table` with explicit periods. Runs the whole pipeline; once
    /// this returns the table is fully annotated and no longer mutated.
    pub fn with_config(mut table: Table, config: PipelineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        // Table construction already guarantees N >= 1.
        // Fail fast on missing inputs before any stage writes anything.
        for name in REQUIRED_COLUMNS {
            table.require(name)?;
        }

        midprice::compute(&mut table)?;

        let sma_series = sma(table.require("midclose")?, config.sma_period);
        table.insert("SMA", sma_series)?;

        let ema_series = ema(table.require("midclose")?, config.ema_period);
        table.insert("EMA", ema_series)?;

        macd::compute(
            &mut table,
            config.macd_period_long,
            config.macd_period_short,
            config.macd_period_signal,
            "midclose",
        )?;

        rsi::compute(&mut table, config.rsi_period, "midclose")?;

        // Same period and source column as the SMA column, by construction.
        bollinger::compute(&mut table, config.sma_period, "midclose", "SMA")?;

        heiken_ashi::compute(&mut table, "midopen", "midclose", "midhigh", "midlow")?;

        ichimoku::compute(
            &mut table,
            IchimokuParams {
                tenkan_period: config.ichimoku_tenkan_period,
                kijun_period: config.ichimoku_kijun_period,
                senkou_b_period: config.ichimoku_senkou_b_period,
                shift: config.ichimoku_shift,
            },
            "midclose",
            "midhigh",
            "midlow",
        )?;

        info!(
            rows = table.len(),
            columns = table.column_names().count(),
            "indicator pipeline complete"
        );

        Ok(Self { table, config })
    }

    /// The fully annotated table: raw inputs plus every derived column.
    pub fn all_indicators(&self) -> &Table {
        &self.table
    }

    /// The parameterisation the pipeline ran with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Give the annotated table to the caller.
    pub fn into_table(self) -> Table {
        self.table
    }
}
