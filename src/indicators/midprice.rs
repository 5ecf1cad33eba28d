// =============================================================================
// Midprice derivation — bid/ask midpoint for each OHLC leg
// =============================================================================
//
// mid[i] = (bid[i] + ask[i]) / 2, row-independent. Every later stage works
// on these mid columns rather than one side of the book.

use crate::error::EngineError;
use crate::table::Table;

/// Write `midopen`, `midclose`, `midhigh` and `midlow` into the table.
pub fn compute(table: &mut Table) -> Result<(), EngineError> {
    let pairs = [
        ("midopen", "bidopen", "askopen"),
        ("midclose", "bidclose", "askclose"),
        ("midhigh", "bidhigh", "askhigh"),
        ("midlow", "bidlow", "asklow"),
    ];

    for (out, bid_name, ask_name) in pairs {
        let bid = table.require(bid_name)?;
        let ask = table.require(ask_name)?;
        let mid: Vec<f64> = bid
            .iter()
            .zip(ask.iter())
            .map(|(b, a)| (b + a) / 2.0)
            .collect();
        table.insert(out, mid)?;
    }

    Ok(())
}
