use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ready,
    Draft,
    Reject,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ready => "READY",
            Status::Draft => "DRAFT",
            Status::Reject => "REJECT",
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "READY" => Ok(Status::Ready),
            "DRAFT" => Ok(Status::Draft),
            "REJECT" => Ok(Status::Reject),
            other => Err(format!("unknown parse status {other:?}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Long,
    Short,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Long => "long",
            Side::Short => "short",
        }
    }
}

/// How a position is opened.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntryDirective {
    Market { price: Option<f64> },
    Limit { price: f64 },
    Zone { price_min: f64, price_max: f64 },
}

impl EntryDirective {
    /// Prices that must sit between the stop and the targets.
    /// A market entry has no fixed price and contributes nothing.
    pub fn check_prices(&self) -> Vec<f64> {
        match *self {
            EntryDirective::Market { .. } => Vec::new(),
            EntryDirective::Limit { price } => vec![price],
            EntryDirective::Zone {
                price_min,
                price_max,
            } => vec![price_min, price_max],
        }
    }

    /// Single representative price (zone lower bound for zones).
    pub fn reference_price(&self) -> Option<f64> {
        match *self {
            EntryDirective::Market { price } => price,
            EntryDirective::Limit { price } => Some(price),
            EntryDirective::Zone { price_min, .. } => Some(price_min),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Signal {
    pub symbol: Option<String>,
    pub side: Option<Side>,
    pub entry: Option<EntryDirective>,
    pub entries: Vec<EntryDirective>,
    pub sl: Option<f64>,
    pub tps: Vec<f64>,
    pub total_position_pct: Option<f64>,
    pub alloc_fracs: Vec<String>,
}

impl Signal {
    pub fn has_entry(&self) -> bool {
        self.entry.is_some() || !self.entries.is_empty()
    }
}

/// Outcome of parsing one setup block.
///
/// `signal` is `None` exactly when `status` is `Reject`, and `confidence` is a
/// function of `status` and whether `warnings` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub status: Status,
    pub confidence: f64,
    pub signal: Option<Signal>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}
