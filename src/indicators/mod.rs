// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// One file per indicator. `sma` and `ema` are reusable building blocks that
// take a slice and return a full-length series (NaN where undefined); the
// rest are table stages that read columns written by earlier stages and
// append their own. Stage order is enforced by the engine, not here.

pub mod bollinger;
pub mod ema;
pub mod heiken_ashi;
pub mod ichimoku;
pub mod macd;
pub mod midprice;
pub mod rsi;
pub mod sma;
