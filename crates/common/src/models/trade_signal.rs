use serde::{Deserialize, Serialize};

use crate::models::signal::{ParseResult, Status};

/// A READY or DRAFT parse result as stored for its source chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTradeSignal {
    pub raw_message_id: i64,
    pub block_index: i64,
    pub status: Status,
    pub confidence: f64,
    pub symbol: Option<String>,
    pub side: Option<String>,
    pub entry_price: Option<f64>,
    pub size_pct: Option<f64>,
    pub sl: Option<f64>,
    pub tp1: Option<f64>,
    pub tp2: Option<f64>,
    pub tp3: Option<f64>,
    pub parsed_json: String,
}

impl StoredTradeSignal {
    /// Returns `Ok(None)` for rejected blocks (the only results without a
    /// signal), they are never stored.
    pub fn from_result(
        raw_message_id: i64,
        block_index: i64,
        result: &ParseResult,
    ) -> Result<Option<Self>, serde_json::Error> {
        let Some(signal) = result.signal.as_ref() else {
            return Ok(None);
        };

        let tp = |i: usize| signal.tps.get(i).copied();

        Ok(Some(Self {
            raw_message_id,
            block_index,
            status: result.status,
            confidence: result.confidence,
            symbol: signal.symbol.clone(),
            side: signal.side.map(|s| s.as_str().to_string()),
            entry_price: signal.entry.as_ref().and_then(|e| e.reference_price()),
            size_pct: signal.total_position_pct,
            sl: signal.sl,
            tp1: tp(0),
            tp2: tp(1),
            tp3: tp(2),
            parsed_json: serde_json::to_string(result)?,
        }))
    }
}
