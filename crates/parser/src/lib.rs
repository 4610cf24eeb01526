//! Turns free-form trading-signal chat text (Russian/English) into structured
//! trade setups.
//!
//! `parse_text` segments a message into setup blocks and `parse_block` runs
//! the field extractors, the directional check and the status classifier over
//! one block. Parsing is pure and never fails: problems are reported through
//! `ParseResult::errors` and `ParseResult::warnings`.

use std::fs;
use std::path::{Path, PathBuf};

use common::models::{ParseResult, Signal};
use thiserror::Error;
use tracing::{debug, trace};

pub mod classifier;
pub mod diagnostics;
pub mod extract;
pub mod normalize;
mod patterns;
pub mod splitter;
pub mod validator;

pub use normalize::{is_valid_symbol, normalize_number, normalize_symbol};
pub use splitter::{split_blocks, split_setups};

use diagnostics::{DIRECTIONAL_CONFLICT, Diagnostics};
use validator::Verdict;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parses one setup block into exactly one result.
pub fn parse_block(block: &str) -> ParseResult {
    let mut diagnostics = Diagnostics::default();

    let symbol = extract::extract_symbol(block);
    let side = extract::extract_side(block);
    let levels = extract::extract_levels(block);
    let entry = extract::extract_entry(block, &mut diagnostics);
    let allocation = extract::extract_allocation(block);

    let mut signal = Signal {
        symbol,
        side,
        entry: entry.primary,
        entries: entry.entries,
        sl: levels.sl,
        tps: levels.tps,
        ..Signal::default()
    };
    signal.total_position_pct = allocation.total_position_pct(signal.has_entry(), &mut diagnostics);
    signal.alloc_fracs = allocation.fracs;

    let verdict = validator::validate(&signal);
    if verdict == Verdict::Conflict {
        diagnostics.error(DIRECTIONAL_CONFLICT);
    }

    let result = classifier::classify(signal, verdict, diagnostics);
    trace!(
        status = result.status.as_str(),
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "Parsed block"
    );
    result
}

/// Parses every setup in a message, in message order.
pub fn parse_text(text: &str) -> Vec<ParseResult> {
    let mut blocks = split_setups(text);
    if blocks.is_empty() && !text.trim().is_empty() {
        blocks.push(text.to_string());
    }
    debug!("Split message into {} block(s)", blocks.len());

    blocks.iter().map(|block| parse_block(block)).collect()
}

pub fn load_fixture(path: impl AsRef<Path>) -> Result<String, FixtureError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::models::{EntryDirective, Side, Status};

    #[test]
    fn test_parse_block_short_limit() {
        let result = parse_block(
            "$BTCUSDT - SHORT\nВход лимитка 67900\nStop 68700\nTейк-профит\n1) 67000",
        );
        let signal = result.signal.as_ref().unwrap();
        assert_eq!(result.status, Status::Ready);
        assert_eq!(result.confidence, 0.8);
        assert_eq!(signal.symbol.as_deref(), Some("BTCUSDT"));
        assert_eq!(signal.side, Some(Side::Short));
        assert_eq!(signal.entry, Some(EntryDirective::Limit { price: 67900.0 }));
        assert_eq!(signal.total_position_pct, Some(1.0));
    }

    #[test]
    fn test_parse_text_whitespace_only() {
        assert!(parse_text("  \n\t \n").is_empty());
        assert!(parse_text("").is_empty());
    }

    #[test]
    fn test_load_fixture_missing_file() {
        let err = load_fixture("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("not/here.txt"));
    }
}
