// =============================================================================
// Midline — Technical-indicator pipeline over bid/ask quote history
// =============================================================================
//
// Annotates an ordered table of bid/ask OHLC quotes with a fixed pipeline of
// technical indicators and discrete trading signals:
//
//   midprices → SMA → EMA → MACD → RSI → Bollinger → Heiken-Ashi → Ichimoku
//
// Later stages read columns written by earlier ones, so the order is strict.
// Warm-up rows where a rolling statistic lacks history are kept as NaN, never
// dropped; callers decide what to do with them.
//
// Loading raw quotes and persisting or plotting the annotated table are the
// caller's business. The engine only computes.
// =============================================================================

pub mod config;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod table;
pub mod types;

pub use config::PipelineConfig;
pub use engine::IndicatorEngine;
pub use error::EngineError;
pub use table::Table;
pub use types::Quote;
